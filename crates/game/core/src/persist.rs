//! Save records.
//!
//! A save file is a bincode-encoded [`SaveRecord`] followed by the 32-byte
//! SHA-256 digest of those bytes. bincode 1.x encodes integers at fixed width
//! in little-endian order, so the record layout is fixed:
//!
//! ```text
//! version | attributes[100] | item codes[26] | item args[26]
//!         | absorbed[26 x 3] | equipment[3] | spells[38] | scrolls[28]
//!         | potions[35] | clock | haste step
//! ```
//!
//! Loading verifies the digest before decoding and validates every length
//! and item code before any state is built.

use std::fs;
use std::path::Path;

use sha2::{Digest, Sha256};

use crate::config::GameConfig;
use crate::error::{ErrorSeverity, GameError};
use crate::state::{
    Absorbed, Attributes, EquipSlot, Equipment, Inventory, Item, ItemKind, Knowledge,
    MAX_CARRY_EFFECTS, PlayerState, SlotIndex, TurnState,
};

/// Current record layout.
pub const SAVE_VERSION: u32 = 1;

const DIGEST_LEN: usize = 32;

/// Equipment entry meaning "nothing equipped".
const NO_SLOT: i8 = -1;

/// Errors raised while writing or reading a save file.
#[derive(Debug, thiserror::Error)]
pub enum PersistError {
    #[error("save file i/o failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("save record encoding failed: {0}")]
    Encode(#[from] bincode::Error),

    #[error("save file is truncated ({len} bytes)")]
    Truncated { len: usize },

    #[error("save digest mismatch: stored {stored}, computed {computed}")]
    DigestMismatch { stored: String, computed: String },

    #[error("{field} holds {found} entries, expected {expected}")]
    BadLength {
        field: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("unknown item code {code} in slot {slot}")]
    UnknownItemCode { slot: usize, code: u8 },

    #[error("unsupported save version {0}")]
    UnsupportedVersion(u32),
}

impl GameError for PersistError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Io(_) => ErrorSeverity::Recoverable,
            _ => ErrorSeverity::Corrupt,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Io(_) => "PERSIST_IO",
            Self::Encode(_) => "PERSIST_ENCODE",
            Self::Truncated { .. } => "PERSIST_TRUNCATED",
            Self::DigestMismatch { .. } => "PERSIST_DIGEST_MISMATCH",
            Self::BadLength { .. } => "PERSIST_BAD_LENGTH",
            Self::UnknownItemCode { .. } => "PERSIST_UNKNOWN_ITEM_CODE",
            Self::UnsupportedVersion(_) => "PERSIST_UNSUPPORTED_VERSION",
        }
    }
}

/// Flat, fixed-order image of a [`PlayerState`].
///
/// Item code `0` marks an empty slot; equipment entries are slot indices or
/// `-1`. `absorbed` holds each slot's floor-absorbed carry effects, slot
/// after slot.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SaveRecord {
    pub version: u32,
    pub attributes: Vec<i64>,
    pub item_codes: Vec<u8>,
    pub item_args: Vec<i32>,
    pub absorbed: Vec<i64>,
    pub equipment: [i8; 3],
    pub spells: Vec<bool>,
    pub scrolls: Vec<bool>,
    pub potions: Vec<bool>,
    pub clock: u64,
    pub haste_step: bool,
}

impl SaveRecord {
    pub fn from_state(state: &PlayerState) -> Self {
        let (item_codes, item_args) = SlotIndex::all()
            .map(|slot| match state.inventory.get(slot) {
                Some(item) => (item.kind.code(), item.arg),
                None => (0, 0),
            })
            .unzip();

        let equipment = EquipSlot::ALL.map(|which| {
            state
                .equipment
                .get(which)
                .map_or(NO_SLOT, |slot| slot.get() as i8)
        });

        Self {
            version: SAVE_VERSION,
            attributes: state.attrs.raw().to_vec(),
            item_codes,
            item_args,
            absorbed: SlotIndex::all()
                .flat_map(|slot| state.inventory.absorbed(slot))
                .collect(),
            equipment,
            spells: state.knowledge.spells.to_vec(),
            scrolls: state.knowledge.scrolls.to_vec(),
            potions: state.knowledge.potions.to_vec(),
            clock: state.turn.clock,
            haste_step: state.turn.haste_step,
        }
    }

    /// Validates the record and rebuilds the state it describes.
    ///
    /// Equipment entries that point outside the pack or at an empty slot are
    /// dropped rather than rejected, so a reference never dangles.
    pub fn into_state(self) -> Result<PlayerState, PersistError> {
        if self.version != SAVE_VERSION {
            return Err(PersistError::UnsupportedVersion(self.version));
        }

        let attributes: [i64; GameConfig::ATTRIBUTE_SLOTS] =
            fixed("attributes", self.attributes)?;
        let codes: [u8; GameConfig::INVENTORY_SLOTS] = fixed("item codes", self.item_codes)?;
        let args: [i32; GameConfig::INVENTORY_SLOTS] = fixed("item args", self.item_args)?;
        if self.absorbed.len() != GameConfig::INVENTORY_SLOTS * MAX_CARRY_EFFECTS {
            return Err(PersistError::BadLength {
                field: "absorbed",
                expected: GameConfig::INVENTORY_SLOTS * MAX_CARRY_EFFECTS,
                found: self.absorbed.len(),
            });
        }

        let mut inventory = Inventory::empty();
        for (slot, (code, arg)) in SlotIndex::all().zip(codes.into_iter().zip(args)) {
            if code == 0 {
                continue;
            }
            let kind = ItemKind::from_repr(code).ok_or(PersistError::UnknownItemCode {
                slot: slot.get(),
                code,
            })?;
            inventory.put(slot, Item::new(kind, arg));
            let start = slot.get() * MAX_CARRY_EFFECTS;
            let absorbed: Absorbed = fixed(
                "absorbed",
                self.absorbed[start..start + MAX_CARRY_EFFECTS].to_vec(),
            )?;
            inventory.set_absorbed(slot, absorbed);
        }

        let mut equipment = Equipment::empty();
        for (which, raw) in EquipSlot::ALL.into_iter().zip(self.equipment) {
            let slot = usize::try_from(raw)
                .ok()
                .and_then(SlotIndex::new)
                .filter(|slot| inventory.get(*slot).is_some());
            match slot {
                Some(slot) => {
                    equipment.assign(which, slot);
                }
                None if raw != NO_SLOT => {
                    tracing::warn!(?which, raw, "dropping dangling equipment reference");
                }
                None => {}
            }
        }

        let knowledge = Knowledge {
            spells: fixed("spells", self.spells)?,
            scrolls: fixed("scrolls", self.scrolls)?,
            potions: fixed("potions", self.potions)?,
        };

        Ok(PlayerState {
            attrs: Attributes::from_raw(attributes),
            inventory,
            equipment,
            knowledge,
            turn: TurnState {
                clock: self.clock,
                haste_step: self.haste_step,
                drop_flag: false,
            },
        })
    }
}

fn fixed<T, const N: usize>(field: &'static str, values: Vec<T>) -> Result<[T; N], PersistError> {
    let found = values.len();
    values.try_into().map_err(|_| PersistError::BadLength {
        field,
        expected: N,
        found,
    })
}

/// Encodes a state and appends its digest.
pub fn to_bytes(state: &PlayerState) -> Result<Vec<u8>, PersistError> {
    let mut bytes = bincode::serialize(&SaveRecord::from_state(state))?;
    let digest = Sha256::digest(&bytes);
    bytes.extend_from_slice(&digest);
    Ok(bytes)
}

/// Checks the trailing digest, then decodes and validates the record.
pub fn from_bytes(bytes: &[u8]) -> Result<PlayerState, PersistError> {
    let Some(split) = bytes.len().checked_sub(DIGEST_LEN) else {
        return Err(PersistError::Truncated { len: bytes.len() });
    };
    let (payload, stored) = bytes.split_at(split);

    let computed = Sha256::digest(payload);
    if computed.as_slice() != stored {
        return Err(PersistError::DigestMismatch {
            stored: hex::encode(stored),
            computed: hex::encode(computed),
        });
    }

    let record: SaveRecord = bincode::deserialize(payload)?;
    record.into_state()
}

/// Writes a save file, replacing any previous one atomically.
pub fn save_to(path: impl AsRef<Path>, state: &PlayerState) -> Result<(), PersistError> {
    let path = path.as_ref();
    let bytes = to_bytes(state)?;
    let temp_path = path.with_extension("tmp");

    fs::write(&temp_path, &bytes)?;
    fs::rename(&temp_path, path)?;

    tracing::debug!(path = %path.display(), len = bytes.len(), "saved player state");
    Ok(())
}

pub fn load_from(path: impl AsRef<Path>) -> Result<PlayerState, PersistError> {
    let path = path.as_ref();
    let bytes = fs::read(path)?;
    let state = from_bytes(&bytes)?;

    tracing::debug!(path = %path.display(), level = state.level(), "loaded player state");
    Ok(state)
}
