use once_cell::sync::Lazy;

/// Approximate English letter frequencies, in percent
pub static LETTER_FREQUENCIES: [(char, f32); 26] = [
    ('E', 12.70),
    ('T', 9.05),
    ('A', 8.16),
    ('O', 7.50),
    ('I', 6.96),
    ('N', 6.74),
    ('S', 6.32),
    ('H', 6.09),
    ('R', 5.98),
    ('D', 4.25),
    ('L', 4.02),
    ('C', 2.78),
    ('U', 2.75),
    ('M', 2.40),
    ('W', 2.36),
    ('F', 2.22),
    ('G', 2.01),
    ('Y', 1.97),
    ('P', 1.92),
    ('B', 1.49),
    ('V', 0.97),
    ('K', 0.77),
    ('J', 0.15),
    ('X', 0.15),
    ('Q', 0.09),
    ('Z', 0.07),
];

/// Running totals of `LETTER_FREQUENCIES`, for weighted sampling
pub static CUMULATIVE_FREQUENCIES: Lazy<Vec<(char, f32)>> = Lazy::new(|| {
    let mut cumulative = 0.0;
    LETTER_FREQUENCIES
        .iter()
        .map(|&(ch, freq)| {
            cumulative += freq;
            (ch, cumulative)
        })
        .collect()
});

/// Sum of all frequencies
pub fn total_frequency() -> f32 {
    CUMULATIVE_FREQUENCIES.last().map_or(0.0, |&(_, total)| total)
}

/// Letter whose cumulative band contains `sample`, a value in
/// `[0, total_frequency())`. Samples past the end map to the last letter.
pub fn letter_at(sample: f32) -> char {
    CUMULATIVE_FREQUENCIES
        .iter()
        .find(|&&(_, cumulative)| sample < cumulative)
        .or_else(|| CUMULATIVE_FREQUENCIES.last())
        .map_or('E', |&(ch, _)| ch)
}
