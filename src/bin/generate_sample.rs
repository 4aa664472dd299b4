use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

const TOPICS: &[&str] = &[
    "learn Rust",
    "lose weight",
    "invest in stocks",
    "prepare for an interview",
    "improve my English",
    "start a business",
    "become a data scientist",
    "travel cheaply",
];

const OPENERS: &[&str] = &[
    "What is the best way to",
    "How can I",
    "How do I",
    "What should I do to",
    "Is it possible to",
];

const TRAIN_ROWS: usize = 200;
const TEST_ROWS: usize = 80;

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn below(&mut self, n: usize) -> usize {
        (self.next_u64() % n as u64) as usize
    }

    fn pick<'a>(&mut self, items: &[&'a str]) -> &'a str {
        items[self.below(items.len())]
    }
}

/// A question pair. Pairs on the same topic count as duplicates.
fn question_pair(rng: &mut SimpleRng) -> (String, String, bool) {
    let topic = rng.pick(TOPICS);
    let other = if rng.below(3) == 0 { topic } else { rng.pick(TOPICS) };
    let q1 = format!("{} {topic}?", rng.pick(OPENERS));
    let q2 = format!("{} {other}?", rng.pick(OPENERS));
    (q1, q2, other == topic)
}

fn write_train(path: &Path, rng: &mut SimpleRng) -> Result<usize> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("creating {}", path.display()))?;
    writer.write_record(["id", "qid1", "qid2", "question1", "question2", "is_duplicate"])?;

    for id in 0..TRAIN_ROWS {
        let (q1, q2, duplicate) = question_pair(rng);
        writer.write_record([
            id.to_string(),
            (2 * id + 1).to_string(),
            (2 * id + 2).to_string(),
            q1,
            q2,
            u8::from(duplicate).to_string(),
        ])?;
    }
    writer.flush()?;
    Ok(TRAIN_ROWS)
}

fn write_test(path: &Path, rng: &mut SimpleRng) -> Result<usize> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("creating {}", path.display()))?;
    writer.write_record(["test_id", "question1", "question2"])?;

    for id in 0..TEST_ROWS {
        let (q1, q2, _) = question_pair(rng);
        // Some test questions are blank, as in the real dump.
        let q2 = if rng.below(20) == 0 { String::new() } else { q2 };
        writer.write_record([id.to_string(), q1, q2])?;
    }
    writer.flush()?;
    Ok(TEST_ROWS)
}

fn main() -> Result<()> {
    let out_dir = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("sample_data"));
    std::fs::create_dir_all(&out_dir)
        .with_context(|| format!("creating {}", out_dir.display()))?;

    let mut rng = SimpleRng::new(42);

    let train = out_dir.join("train.csv");
    let rows = write_train(&train, &mut rng)?;
    println!("Wrote {rows} question pairs to {}", train.display());

    for name in ["test.csv", "test_2.csv"] {
        let path = out_dir.join(name);
        let rows = write_test(&path, &mut rng)?;
        println!("Wrote {rows} question pairs to {}", path.display());
    }

    Ok(())
}
