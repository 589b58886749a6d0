pub mod client;

pub use client::{OcrClient, RecognizedText};
