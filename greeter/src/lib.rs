// -*- coding: utf-8 -*-
//
// Copyright (C) 2026 Matt Moore <matt@mattmoore.io>
//
// Licensed under the Apache License version 2.0
// or the MIT license, at your option.
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! This crate implements the greeting string formatting core.
//!
//! It is free of JNI types and `unsafe` code.
//! The JVM boundary lives in the `greeter-jni` crate.

#![forbid(unsafe_code)]

/// Prefix of every greeting.
const PREFIX: &str = "Hello, ";

/// Suffix of every greeting.
const SUFFIX: &str = ".";

/// Format the greeting for the given name.
///
/// Returns the literal concatenation `"Hello, " + name + "."`.
///
/// The buffer is allocated with the exact required size up front.
/// The empty name is valid and yields `"Hello, ."`.
pub fn greet(name: &str) -> String {
    let mut greeting = String::with_capacity(PREFIX.len() + name.len() + SUFFIX.len());
    greeting.push_str(PREFIX);
    greeting.push_str(name);
    greeting.push_str(SUFFIX);
    greeting
}


// vim: ts=4 sw=4 expandtab
