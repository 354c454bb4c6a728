/*
 * ==========================================================================
 * QUILL - The Quill Expression Language
 * ==========================================================================
 *
 * File:     parser/mod.rs
 * Purpose:  Root module for the Quill recursive-descent parser.
 *
 * This module wires together all parser sub-modules, including:
 *   - Core parser control logic
 *   - Statement parsing
 *   - Expression parsing
 *   - Shared helper utilities
 *
 * Author:   Quill Contributors
 *
 * License:
 * This file is part of the Quill language front-end project.
 *
 * Quill is dual-licensed under the terms of:
 *   - The MIT license
 *   - The Apache License, Version 2.0
 *
 * You may choose either license to govern your use of this software.
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under these licenses is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *
 * ==========================================================================
 */

/// Core parser orchestration:
/// - Owns the `Parser` struct and its lookahead slot
/// - Exposes the `parse(source)` entry point
pub mod parser;

/// Statement-level parsing:
/// - program / statement list / expression statement
pub mod statements;

/// Expression-level parsing:
/// - assignment → logical or → logical and → equality → comparison →
///   term → factor → unary → call/member → primary
pub mod expressions;

/// Shared parser helpers:
/// - the `eat` consumption discipline
/// - lookahead category predicates
pub mod helpers;

/// Re-export the public entry points so callers can use
/// `crate::parser::parse(...)`.
pub use parser::{parse, Parser};
