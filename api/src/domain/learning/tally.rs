use super::learning_type::LearningType;

/// Picks the most frequent learning type among `answers`.
///
/// Counts are kept in first-seen order and folded left with a strict `>`,
/// so on a tie the type whose first occurrence comes latest wins.
pub fn dominant_type(answers: &[LearningType]) -> Option<LearningType> {
    let mut counts: Vec<(LearningType, usize)> = Vec::with_capacity(LearningType::ALL.len());
    for answer in answers {
        match counts.iter_mut().find(|(t, _)| t == answer) {
            Some((_, n)) => *n += 1,
            None => counts.push((*answer, 1)),
        }
    }
    counts
        .into_iter()
        .reduce(|best, next| if best.1 > next.1 { best } else { next })
        .map(|(t, _)| t)
}
