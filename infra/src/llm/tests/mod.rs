//! Unit tests for LLM module

mod groq_tests;
