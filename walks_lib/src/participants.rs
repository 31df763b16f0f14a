pub const NAME_SEPARATOR: &str = " • ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParticipantSegment<'a> {
    Name(&'a str),
    Separator,
}

/// Puts a separator between consecutive names: `n` names give `2n - 1` segments.
pub fn interleave(names: &[String]) -> Vec<ParticipantSegment<'_>> {
    let mut segments = Vec::with_capacity((names.len() * 2).saturating_sub(1));

    for (i, name) in names.iter().enumerate() {
        if i > 0 {
            segments.push(ParticipantSegment::Separator);
        }
        segments.push(ParticipantSegment::Name(name));
    }

    segments
}

#[cfg(test)]
mod tests {
    use super::*;
    use ParticipantSegment::*;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn empty() {
        assert!(interleave(&[]).is_empty());
    }

    #[test]
    fn single_name_has_no_separator() {
        assert_eq!(interleave(&names(&["Anna"])), vec![Name("Anna")]);
    }

    #[test]
    fn separators_between_names() {
        let list = names(&["Anna", "Ben", "Carla"]);
        let segments = interleave(&list);

        assert_eq!(segments, vec![Name("Anna"), Separator, Name("Ben"), Separator, Name("Carla")]);
        assert_eq!(segments.len(), list.len() * 2 - 1);
    }
}
