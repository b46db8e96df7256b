use crate::model::{FingerState, Hand, Note};

/// How a note is layered onto a preceding hold note on the same hand.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum LnLayerType {
    #[default]
    None,
    /// Released after the hold is released.
    OutsideRelease,
    /// Held and released while the hold is still held.
    InsideRelease,
    /// Tapped while the hold is held.
    InsideTap,
}

/// Finger movement from one node to the next node on the same hand.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum FingerAction {
    #[default]
    None,
    SimpleJack,
    TechnicalJack,
    Trill,
    Bracket,
}

/// A note owned by a [`StrainNode`].
#[derive(Clone, Debug, PartialEq)]
pub struct StrainNote {
    /// Note with times already divided by the clock rate.
    pub note: Note,
    pub finger_state: FingerState,
    pub ln_layer_type: LnLayerType,
    /// Additive strain of hold note layering.
    pub ln_strain_difficulty: f64,
    pub strain_value: f64,
}

/// Notes of one hand at the same point in time.
///
/// Nodes live in a single time-ordered collection; `next_on_hand` and
/// `next_after_wrist_up` are indices into it.
#[derive(Clone, Debug, PartialEq)]
pub struct StrainNode {
    pub notes: Vec<StrainNote>,
    pub start_time: f64,
    /// The latest end time of all owned notes.
    pub end_time: f64,
    pub hand: Hand,
    pub finger_state: FingerState,
    pub chord_multiplier: f64,
    pub finger_action: FingerAction,
    pub action_strain_coefficient: f64,
    pub finger_action_duration_ms: f64,
    /// Currently always `1.0`.
    pub pattern_strain_multiplier: f64,
    pub wrist_state: FingerState,
    pub wrist_manipulation_multiplier: f64,
    pub stamina_multiplier: f64,
    pub total_strain_value: f64,
    pub next_on_hand: Option<usize>,
    pub next_after_wrist_up: Option<usize>,
}

impl StrainNode {
    pub(crate) fn new(note: &Note, clock_rate: f64, hand: Hand, finger_state: FingerState) -> Self {
        let start_time = note.start_time / clock_rate;

        let end_time = if note.is_hold() {
            note.end_time / clock_rate
        } else {
            start_time
        };

        let note = Note::hold(note.column, start_time, end_time);

        Self {
            start_time: note.start_time,
            end_time: note.end_time,
            notes: vec![StrainNote {
                note,
                finger_state,
                ln_layer_type: LnLayerType::None,
                ln_strain_difficulty: 1.0,
                strain_value: 0.0,
            }],
            hand,
            finger_state: FingerState::NONE,
            chord_multiplier: 1.0,
            finger_action: FingerAction::None,
            action_strain_coefficient: 1.0,
            finger_action_duration_ms: 0.0,
            pattern_strain_multiplier: 1.0,
            wrist_state: FingerState::NONE,
            wrist_manipulation_multiplier: 1.0,
            stamina_multiplier: 1.0,
            total_strain_value: 0.0,
            next_on_hand: None,
            next_after_wrist_up: None,
        }
    }

    /// Whether the node holds more than one note.
    pub fn is_hand_chord(&self) -> bool {
        self.notes.len() > 1
    }

    /// Whether any owned note is a hold note.
    pub fn is_hold(&self) -> bool {
        self.end_time > self.start_time
    }

    /// Take over the notes of `other` except for fingers that are already
    /// engaged in this node.
    pub(crate) fn absorb(&mut self, other: Self) {
        for note in other.notes {
            let stacked = self
                .notes
                .iter()
                .any(|owned| owned.finger_state == note.finger_state);

            if !stacked {
                self.end_time = self.end_time.max(note.note.end_time);
                self.notes.push(note);
            }
        }
    }

    pub(crate) fn solve_finger_state(&mut self) {
        self.finger_state = self
            .notes
            .iter()
            .fold(FingerState::NONE, |state, note| state | note.finger_state);
    }

    /// Calculate the strain of every owned note and store their average.
    pub(crate) fn calculate_strain_value(&mut self) {
        let multiplier = self.action_strain_coefficient
            * self.wrist_manipulation_multiplier
            * self.chord_multiplier
            * self.pattern_strain_multiplier
            * self.stamina_multiplier;

        // * recomputed from scratch; the pass after stamina must not stack on
        // * the pass before it
        let mut total = 0.0;

        for note in self.notes.iter_mut() {
            note.strain_value = multiplier + note.ln_strain_difficulty;
            total += note.strain_value;
        }

        self.total_strain_value = total / self.notes.len() as f64;
    }
}
