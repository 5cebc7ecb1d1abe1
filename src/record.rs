/// Interleave suffixes recognized on read names.
const INTERLEAVES: [&str; 2] = ["/1", "/2"];

/// One FASTQ record: name, sequence, plus line, and quality.
///
/// A trailing interleave suffix (`/1` or `/2`) is stripped from the name
/// at construction and kept in `interleave`, so mates compare equal by
/// name alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FastqRead {
    pub name: String,
    pub sequence: String,
    pub plusline: String,
    pub quality: String,
    pub interleave: Option<&'static str>,
}

impl FastqRead {
    #[must_use]
    pub fn new(name: String, sequence: String, plusline: String, quality: String) -> Self {
        let (name, interleave) = split_interleave(name);
        Self {
            name,
            sequence,
            plusline,
            quality,
            interleave,
        }
    }
}

fn split_interleave(mut name: String) -> (String, Option<&'static str>) {
    for interleave in INTERLEAVES {
        if name.ends_with(interleave) {
            name.truncate(name.len() - interleave.len());
            return (name, Some(interleave));
        }
    }
    (name, None)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read(name: &str) -> FastqRead {
        FastqRead::new(
            name.to_string(),
            "ACGT".to_string(),
            "+".to_string(),
            "IIII".to_string(),
        )
    }

    #[test]
    fn new_strips_interleave_one() {
        let read = read("@fqlint/1");
        assert_eq!(read.name, "@fqlint");
        assert_eq!(read.interleave, Some("/1"));
    }

    #[test]
    fn new_strips_interleave_two() {
        let read = read("@fqlint/2");
        assert_eq!(read.name, "@fqlint");
        assert_eq!(read.interleave, Some("/2"));
    }

    #[test]
    fn new_keeps_plain_name() {
        let read = read("@fqlint");
        assert_eq!(read.name, "@fqlint");
        assert_eq!(read.interleave, None);
    }

    #[test]
    fn new_only_strips_trailing_suffix() {
        let read = read("@a/1b");
        assert_eq!(read.name, "@a/1b");
        assert_eq!(read.interleave, None);
    }

    #[test]
    fn new_keeps_fields() {
        let read = FastqRead::new(
            "@r".to_string(),
            "ACGT".to_string(),
            "+".to_string(),
            "IIII".to_string(),
        );
        assert_eq!(read.sequence, "ACGT");
        assert_eq!(read.plusline, "+");
        assert_eq!(read.quality, "IIII");
    }

    #[test]
    fn new_empty_name_has_no_interleave() {
        let read = read("");
        assert_eq!(read.name, "");
        assert_eq!(read.interleave, None);
    }
}
