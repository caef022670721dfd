//! Demo posts so a fresh server has something to list.

use chrono::Utc;

use blog_core::error::RepoError;
use blog_core::ports::PostRepository;

const DEMO_POSTS: [(&str, &str); 2] = [
    ("10 things -- you won't believe #4", "Billy Bob"),
    ("Lions and tigers and bears oh my", "Lefty Lil"),
];

const WORDS: [&str; 24] = [
    "lorem", "ipsum", "dolor", "sit", "amet", "consectetur", "adipiscing", "elit", "sed", "do",
    "eiusmod", "tempor", "incididunt", "ut", "labore", "et", "dolore", "magna", "aliqua", "enim",
    "ad", "minim", "veniam", "quis",
];

const MIN_WORDS: u64 = 5;
const MAX_WORDS: u64 = 15;

/// Insert the demo posts into `store`.
pub async fn seed_posts(store: &dyn PostRepository) -> Result<(), RepoError> {
    let mut seed = Utc::now().timestamp_subsec_nanos() as u64;

    for (title, author) in DEMO_POSTS {
        seed = next(seed);
        store
            .create(title.to_string(), lorem_sentence(seed), author.to_string())
            .await?;
    }

    tracing::info!(count = DEMO_POSTS.len(), "Seeded demo posts");
    Ok(())
}

/// A capitalised lorem-ipsum sentence of 5 to 15 words, ending in a period.
pub fn lorem_sentence(seed: u64) -> String {
    let mut state = next(seed);
    let len = MIN_WORDS + state % (MAX_WORDS - MIN_WORDS + 1);

    let mut words = Vec::with_capacity(len as usize);
    for _ in 0..len {
        state = next(state);
        words.push(WORDS[((state >> 33) % WORDS.len() as u64) as usize]);
    }

    let mut sentence = words.join(" ");
    if let Some(first) = sentence.get_mut(0..1) {
        first.make_ascii_uppercase();
    }
    sentence.push('.');
    sentence
}

// Knuth's MMIX LCG step.
fn next(state: u64) -> u64 {
    state
        .wrapping_mul(6364136223846793005)
        .wrapping_add(1442695040888963407)
}
