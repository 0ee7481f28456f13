//! Test fixtures and factory functions for creating test data.

use serde_json::json;
use uuid::Uuid;

use ielts_practice_backend::models::VocabWord;

/// Generate sample vocabulary words.
pub fn sample_words(count: usize) -> Vec<VocabWord> {
    (0..count)
        .map(|i| VocabWord {
            id: Uuid::new_v4(),
            word: format!("word{}", i + 1),
            meaning: format!("meaning of word {}", i + 1),
            example: Some(format!("Example sentence using word{}.", i + 1)),
            audio_url: None,
            level: Some("B1".to_string()),
            difficulty: 1,
        })
        .collect()
}

/// Generate a unit number unlikely to collide with other test runs.
pub fn unique_unit_number() -> u32 {
    (Uuid::new_v4().as_u128() % 1_000_000) as u32 + 1_000
}

/// Create a submit-practice request body.
pub fn submit_practice_request(
    word_id: Uuid,
    is_correct: bool,
    mode: &str,
    unit_number: u32,
) -> serde_json::Value {
    json!({
        "wordId": word_id,
        "isCorrect": is_correct,
        "mode": mode,
        "unitNumber": unit_number
    })
}

/// Create a complete-unit request body.
pub fn complete_unit_request(unit_number: u32, score: Option<u32>) -> serde_json::Value {
    match score {
        Some(s) => json!({ "unitNumber": unit_number, "score": s }),
        None => json!({ "unitNumber": unit_number }),
    }
}

/// Create a history submit request body.
pub fn history_submit_request(unit_number: u32, correct: u32, wrong: u32) -> serde_json::Value {
    let total = correct + wrong;
    let percentage = if total == 0 {
        0
    } else {
        (correct * 100 + total / 2) / total
    };
    json!({
        "unitNumber": unit_number,
        "total": total,
        "correct": correct,
        "wrong": wrong,
        "percentage": percentage
    })
}

/// Create a register request body.
pub fn register_request(username: Option<&str>) -> serde_json::Value {
    match username {
        Some(name) => json!({ "username": name }),
        None => json!({}),
    }
}
