/// Emphasis delimiters.
///
/// `BOLD` shares its first character with `STAR`, so it has to be split
/// out before either italic marker.
pub struct Emphasis;

impl Emphasis {
    pub const BOLD: &'static str = "**";
    /// Alternate italic marker.
    pub const UNDERSCORE: &'static str = "_";
    /// Primary italic marker.
    pub const STAR: &'static str = "*";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bold_starts_with_star() {
        assert!(Emphasis::BOLD.starts_with(Emphasis::STAR));
        assert!(Emphasis::BOLD.len() > Emphasis::STAR.len());
    }
}
