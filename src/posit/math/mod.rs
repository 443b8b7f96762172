use super::*;

/// Square root
mod sqrt;

/// Trigonometric functions, exponentials and logarithms, powers
mod elementary;
