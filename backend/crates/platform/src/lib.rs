//! Platform Crate - Technical Infrastructure
//!
//! This crate provides shared technical foundations:
//! - Cryptographic utilities (HMAC-SHA256 signing, Base64url, random bytes)
//! - Password hashing (Argon2id)
//! - Session cookie building and extraction

pub mod cookie;
pub mod crypto;
pub mod password;
