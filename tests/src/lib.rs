//! Cross-crate checks: shares are encoded with `math::radix`'s alphabet,
//! parsed through the JSON layer and judged by the consistency checker.

#[cfg(test)]
mod integration;
