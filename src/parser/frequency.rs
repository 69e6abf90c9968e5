use std::collections::HashMap;

pub const TOP_TERMS: usize = 10;

/// The `limit` most frequent words, highest count first. Equal counts keep
/// the order in which each word first appeared. Counting is case-sensitive.
pub fn most_common(words: &[String], limit: usize) -> Vec<(String, usize)> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<(String, usize)> = Vec::new();

    for word in words {
        match index.get(word.as_str()) {
            Some(&i) => counts[i].1 += 1,
            None => {
                index.insert(word, counts.len());
                counts.push((word.clone(), 1));
            }
        }
    }

    // stable: ties stay in first-seen order
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts.truncate(limit);
    counts
}

// ── Tests ──
