//! Full activation of one card.

use crate::card::Card;
use crate::constants::{NVB_ANTICOLLISION, NVB_SELECT};
use crate::device::{Device, Initialized};
use crate::types::{CascadeLevel, RequestCode, Uid};
use crate::{Error, Result};

use super::{read_uid, request_card, select_card};

/// Bring one card from idle to selected.
///
/// Runs request, then anticollision and select per cascade level. Single
/// and double size UIDs are supported; a card asking for a third level is
/// rejected with [`Error::UidTooLong`].
pub fn activate(device: &mut Device<Initialized>, code: RequestCode) -> Result<Card> {
    let atqa = request_card(device, code)?;

    let first = read_uid(device, CascadeLevel::One, NVB_ANTICOLLISION)?;
    let sak = select_card(device, CascadeLevel::One, NVB_SELECT, *first.as_bytes())?;
    if !sak.is_uid_incomplete() {
        return Ok(Card::new(Uid::Single(*first.as_bytes()), atqa, sak));
    }

    if !first.is_cascade_tag() {
        log::warn!("sak requests cascade but level 1 has no cascade tag");
    }

    let second = read_uid(device, CascadeLevel::Two, NVB_ANTICOLLISION)?;
    let sak = select_card(device, CascadeLevel::Two, NVB_SELECT, *second.as_bytes())?;
    if sak.is_uid_incomplete() {
        log::debug!("card needs a third cascade level");
        return Err(Error::UidTooLong);
    }

    let a = first.as_bytes();
    let b = second.as_bytes();
    let uid = Uid::Double([a[1], a[2], a[3], b[0], b[1], b[2], b[3]]);
    log::debug!("activated card {}", uid.to_hex());
    Ok(Card::new(uid, atqa, sak))
}
