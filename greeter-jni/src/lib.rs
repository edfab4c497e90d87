// -*- coding: utf-8 -*-
//
// Copyright (C) 2026 Matt Moore <matt@mattmoore.io>
//
// Licensed under the Apache License version 2.0
// or the MIT license, at your option.
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! This crate implements the JVM string boundary of the greeter.
//!
//! Every exported symbol is a thin name binding around one shared
//! implementation. The host-side class owning the `hello` native
//! method differs between the JVM applications that load this
//! library, nothing else does.
//!
//! Ownership at the boundary:
//! - The input [`JString`] is a borrowed handle. A temporary byte
//!   view of it is acquired via [`JNIEnv::get_string`] and released
//!   by drop before the call returns.
//! - The returned `jstring` is a newly allocated string whose
//!   lifetime responsibility transfers to the JVM.

use greeter::greet;
use jni::objects::{JClass, JObject, JString};
use jni::sys::jstring;
use jni::JNIEnv;
use std::fmt;

/// Errors that can occur at the JVM string boundary.
#[derive(Debug)]
enum BridgeError {
    /// The host passed a null string reference.
    InvalidHandle,
    /// The JVM could not provide the input view or allocate the output string.
    AllocationFailure(jni::errors::Error),
}

impl BridgeError {
    /// The Java exception class raised for this error.
    fn exception_class(&self) -> &'static str {
        match self {
            Self::InvalidHandle => "java/lang/NullPointerException",
            Self::AllocationFailure(_) => "java/lang/OutOfMemoryError",
        }
    }
}

impl fmt::Display for BridgeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidHandle => write!(f, "The name string passed to hello() is null."),
            Self::AllocationFailure(e) => {
                write!(f, "Failed to allocate the greeting string: {e}")
            }
        }
    }
}

impl std::error::Error for BridgeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidHandle => None,
            Self::AllocationFailure(e) => Some(e),
        }
    }
}

/// Format the greeting for a borrowed JVM string.
///
/// The temporary view obtained from [`JNIEnv::get_string`] only lives
/// for the copy into the local [`String`] and is released before the
/// greeting is built. The output string handle is owned by the JVM.
fn try_greet(env: &mut JNIEnv<'_>, input: &JString<'_>) -> Result<jstring, BridgeError> {
    if input.as_raw().is_null() {
        return Err(BridgeError::InvalidHandle);
    }
    let name: String = env
        .get_string(input)
        .map_err(BridgeError::AllocationFailure)?
        .into();
    let output = env
        .new_string(greet(&name))
        .map_err(BridgeError::AllocationFailure)?;
    Ok(output.into_raw())
}

/// Entry point shared by all exported `hello` symbols.
///
/// On error a matching Java exception is arranged and a null handle
/// is returned. If the JVM already raised an exception during the
/// failed call, that exception is left pending instead.
fn hello_shim(mut env: JNIEnv<'_>, input: JString<'_>) -> jstring {
    match try_greet(&mut env, &input) {
        Ok(greeting) => greeting,
        Err(e) => {
            if !env.exception_check().unwrap_or(false) {
                let _ = env.throw_new(e.exception_class(), e.to_string());
            }
            JObject::null().into_raw()
        }
    }
}

#[no_mangle]
pub extern "C" fn Java_Greeter_hello<'a>(
    env: JNIEnv<'a>,
    _class: JClass<'a>,
    name: JString<'a>,
) -> jstring {
    hello_shim(env, name)
}

#[no_mangle]
pub extern "C" fn Java_Hello_hello<'a>(
    env: JNIEnv<'a>,
    _class: JClass<'a>,
    name: JString<'a>,
) -> jstring {
    hello_shim(env, name)
}

#[no_mangle]
pub extern "C" fn Java_io_mattmoore_kotlin_playground_cinterop_Greeter_hello<'a>(
    env: JNIEnv<'a>,
    _class: JClass<'a>,
    name: JString<'a>,
) -> jstring {
    hello_shim(env, name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exception_class_mapping() {
        assert_eq!(
            BridgeError::InvalidHandle.exception_class(),
            "java/lang/NullPointerException"
        );
        let e = BridgeError::AllocationFailure(jni::errors::Error::NullPtr("NewString"));
        assert_eq!(e.exception_class(), "java/lang/OutOfMemoryError");
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            BridgeError::InvalidHandle.to_string(),
            "The name string passed to hello() is null."
        );
        let e = BridgeError::AllocationFailure(jni::errors::Error::NullPtr("NewString"));
        assert!(e.to_string().starts_with("Failed to allocate the greeting string:"));
    }

    #[test]
    fn test_error_source() {
        use std::error::Error as _;
        assert!(BridgeError::InvalidHandle.source().is_none());
        let e = BridgeError::AllocationFailure(jni::errors::Error::NullPtr("NewString"));
        assert!(e.source().is_some());
    }
}

// vim: ts=4 sw=4 expandtab
