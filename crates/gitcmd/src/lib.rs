//! Thin wrapper around `git` subprocess invocation.
//!
//! This crate lets a host application run git subcommands without dealing
//! with `std::process::Command` directly: it spawns the `git` binary,
//! captures both output streams, and hands back stdout or an error carrying
//! the literal stderr text. A small sanitization helper tidies single-line
//! answers such as tag names or subjects.

pub mod commands;
pub mod output;
