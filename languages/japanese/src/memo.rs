use std::sync::OnceLock;

use atena_config::policy::MemoCollision;
use atena_core::width::nfkc;
use atena_core::ContactRecord;
use regex::Regex;

pub const MEMO_SLOTS: usize = 5;
pub const NOTES_SLOTS: usize = 3;

const NOTES_SEPARATOR: &str = "／";
const LABEL_VALUE_SEPARATOR: char = '\u{3000}';

static MEMO_LABEL: OnceLock<Regex> = OnceLock::new();
static NOTES_LABEL: OnceLock<Regex> = OnceLock::new();

/// `メモ`/`memo` with an optional slot number, on NFKC lower-cased labels
fn memo_label() -> &'static Regex {
    MEMO_LABEL.get_or_init(|| {
        Regex::new(r"^(?:メモ|memo)\s*([0-9]*)$").expect("Invalid memo label pattern")
    })
}

fn notes_label() -> &'static Regex {
    NOTES_LABEL.get_or_init(|| {
        Regex::new(r"^(?:備考|notes?)\s*[0-9]*$").expect("Invalid notes label pattern")
    })
}

/// Filled メモ1..5 and 備考1..3
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoFields {
    pub memos: [String; MEMO_SLOTS],
    pub notes: [String; NOTES_SLOTS],
}

/// What a relation label asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RelationKind {
    /// メモN, zero-based slot when a digit was given
    Memo(Option<usize>),
    Notes,
    Other,
}

fn classify(label: &str) -> RelationKind {
    let label = nfkc(label.trim()).to_lowercase();

    if let Some(caps) = memo_label().captures(&label) {
        let digits = &caps[1];
        if digits.is_empty() {
            return RelationKind::Memo(None);
        }
        return match digits.parse::<usize>() {
            Ok(n) if (1..=MEMO_SLOTS).contains(&n) => RelationKind::Memo(Some(n - 1)),
            _ => RelationKind::Other,
        };
    }
    if notes_label().is_match(&label) {
        return RelationKind::Notes;
    }
    RelationKind::Other
}

/// Routes `Relation {i}` slots and the `Notes` field into memo/notes columns
#[derive(Debug, Clone, Copy)]
pub struct MemoExtractor {
    collision: MemoCollision,
    slot_budget: usize,
}

impl Default for MemoExtractor {
    fn default() -> Self {
        Self::new(MemoCollision::default(), 120)
    }
}

impl MemoExtractor {
    pub fn new(collision: MemoCollision, slot_budget: usize) -> Self {
        Self {
            collision,
            slot_budget,
        }
    }

    pub fn extract(&self, record: &ContactRecord) -> MemoFields {
        let relations = record.slots("Relation");
        let mut memos: [String; MEMO_SLOTS] = Default::default();
        let mut overflow = Vec::new();

        for slot in &relations {
            if let RelationKind::Memo(target) = classify(slot.label) {
                self.place_memo(&mut memos, target, slot.value, &mut overflow);
            }
        }

        for slot in &relations {
            match classify(slot.label) {
                RelationKind::Memo(_) => {}
                RelationKind::Notes => overflow.push(slot.value.to_string()),
                RelationKind::Other => {
                    let entry = if slot.label.is_empty() {
                        slot.value.to_string()
                    } else {
                        format!("{}{}{}", slot.label, LABEL_VALUE_SEPARATOR, slot.value)
                    };
                    match memos.iter_mut().find(|m| m.is_empty()) {
                        Some(free) => *free = entry,
                        None => overflow.push(entry),
                    }
                }
            }
        }

        let mut pieces = Vec::with_capacity(overflow.len() + 1);
        let notes = record.get("Notes");
        if !notes.is_empty() {
            pieces.push(notes.to_string());
        }
        pieces.extend(overflow);

        MemoFields {
            memos,
            notes: self.pack_notes(pieces),
        }
    }

    fn place_memo(
        &self,
        memos: &mut [String; MEMO_SLOTS],
        target: Option<usize>,
        value: &str,
        overflow: &mut Vec<String>,
    ) {
        if let Some(i) = target {
            if memos[i].is_empty() || self.collision == MemoCollision::Overwrite {
                memos[i] = value.to_string();
                return;
            }
        }
        match memos.iter_mut().find(|m| m.is_empty()) {
            Some(free) => *free = value.to_string(),
            None => {
                tracing::debug!("All memo slots taken, moving value to notes");
                overflow.push(value.to_string());
            }
        }
    }

    /// First piece alone in 備考1, the rest packed into 備考2 then 備考3
    fn pack_notes(&self, pieces: Vec<String>) -> [String; NOTES_SLOTS] {
        let mut notes: [String; NOTES_SLOTS] = Default::default();
        let mut pieces = pieces.into_iter();

        if let Some(first) = pieces.next() {
            notes[0] = first;
        }

        let mut slot = 1;
        for piece in pieces {
            if notes[slot].is_empty() {
                notes[slot] = piece;
                continue;
            }
            let packed_len = notes[slot].chars().count()
                + NOTES_SEPARATOR.chars().count()
                + piece.chars().count();
            if slot + 1 < NOTES_SLOTS && packed_len > self.slot_budget {
                slot += 1;
                notes[slot] = piece;
            } else {
                notes[slot].push_str(NOTES_SEPARATOR);
                notes[slot].push_str(&piece);
            }
        }

        notes
    }
}
