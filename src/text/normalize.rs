// src/text/normalize.rs

use once_cell::sync::Lazy;
use regex::Regex;
use rust_stemmers::{Algorithm, Stemmer};

/// Maximal runs of decimal digits (Unicode `\d`)
static DIGITS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+").unwrap());

/// Canonicalizes product names into stemmed classifier tokens.
pub struct ProductNameNormalizer {
    stemmer: Stemmer,
}

impl ProductNameNormalizer {
    pub fn new() -> Self {
        Self {
            stemmer: Stemmer::create(Algorithm::English),
        }
    }

    pub fn normalize(&self, name: &str) -> String {
        // 1. Lowercase
        let lowered = name.to_lowercase();

        // 2. Each punctuation char becomes one space (runs are not collapsed here)
        let spaced: String = lowered
            .chars()
            .map(|c| if c.is_ascii_punctuation() { ' ' } else { c })
            .collect();

        // 3. Drop digit runs without inserting a separator: "model3000x" -> "modelx"
        let without_digits = DIGITS.replace_all(&spaced, "");

        // 4. Split, stem and rejoin with single spaces
        without_digits
            .split_whitespace()
            .map(|token| self.stemmer.stem(token))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Default for ProductNameNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

/// One-off normalization with the English stemmer.
pub fn transform_name(name: &str) -> String {
    ProductNameNormalizer::new().normalize(name)
}
