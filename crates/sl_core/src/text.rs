use crate::models::ContentSection;

/// Average reading speed the estimate assumes, in words per minute.
pub const WORDS_PER_MINUTE: usize = 200;

/// Total words across all sections: heading words plus the words of every
/// body block, split on whitespace.
pub fn word_count(sections: &[ContentSection]) -> usize {
    sections
        .iter()
        .map(|section| {
            section.heading.split_whitespace().count()
                + section
                    .body
                    .iter()
                    .map(|block| block.text.split_whitespace().count())
                    .sum::<usize>()
        })
        .sum()
}

/// Estimated minutes to read, rounded up.
pub fn reading_time_minutes(sections: &[ContentSection]) -> usize {
    word_count(sections).div_ceil(WORDS_PER_MINUTE)
}
