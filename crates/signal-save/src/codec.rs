//! Binary encode/decode for the save format.
//!
//! Integers are little-endian and fixed-width with no padding between
//! fields. Booleans are a single byte that must be 0 or 1.

use std::io::{Read, Write};

use signal_core::{Color, Node, NodeId, NodeKind, Rect};

use crate::error::SaveError;
use crate::types::SavedState;
use crate::{FORMAT_VERSION, HEADER_LEN, MAGIC, NODE_RECORD_LEN};

// ── Primitive writers ───────────────────────────────────────────

/// Write a single byte.
pub fn write_u8(w: &mut dyn Write, v: u8) -> Result<(), SaveError> {
    w.write_all(&[v])?;
    Ok(())
}

/// Write a little-endian u16.
pub fn write_u16_le(w: &mut dyn Write, v: u16) -> Result<(), SaveError> {
    w.write_all(&v.to_le_bytes())?;
    Ok(())
}

/// Write a little-endian u32.
pub fn write_u32_le(w: &mut dyn Write, v: u32) -> Result<(), SaveError> {
    w.write_all(&v.to_le_bytes())?;
    Ok(())
}

/// Write a little-endian u64.
pub fn write_u64_le(w: &mut dyn Write, v: u64) -> Result<(), SaveError> {
    w.write_all(&v.to_le_bytes())?;
    Ok(())
}

/// Write a little-endian i32.
pub fn write_i32_le(w: &mut dyn Write, v: i32) -> Result<(), SaveError> {
    w.write_all(&v.to_le_bytes())?;
    Ok(())
}

/// Write a little-endian f32.
pub fn write_f32_le(w: &mut dyn Write, v: f32) -> Result<(), SaveError> {
    w.write_all(&v.to_le_bytes())?;
    Ok(())
}

/// Write a boolean as a single 0/1 byte.
pub fn write_bool(w: &mut dyn Write, v: bool) -> Result<(), SaveError> {
    write_u8(w, u8::from(v))
}

// ── Primitive readers ───────────────────────────────────────────

/// Read a single byte.
pub fn read_u8(r: &mut dyn Read) -> Result<u8, SaveError> {
    let mut buf = [0u8; 1];
    r.read_exact(&mut buf)?;
    Ok(buf[0])
}

/// Read a little-endian u16.
pub fn read_u16_le(r: &mut dyn Read) -> Result<u16, SaveError> {
    let mut buf = [0u8; 2];
    r.read_exact(&mut buf)?;
    Ok(u16::from_le_bytes(buf))
}

/// Read a little-endian u32.
pub fn read_u32_le(r: &mut dyn Read) -> Result<u32, SaveError> {
    let mut buf = [0u8; 4];
    r.read_exact(&mut buf)?;
    Ok(u32::from_le_bytes(buf))
}

/// Read a little-endian u64.
pub fn read_u64_le(r: &mut dyn Read) -> Result<u64, SaveError> {
    let mut buf = [0u8; 8];
    r.read_exact(&mut buf)?;
    Ok(u64::from_le_bytes(buf))
}

/// Read a little-endian i32.
pub fn read_i32_le(r: &mut dyn Read) -> Result<i32, SaveError> {
    let mut buf = [0u8; 4];
    r.read_exact(&mut buf)?;
    Ok(i32::from_le_bytes(buf))
}

/// Read a little-endian f32.
pub fn read_f32_le(r: &mut dyn Read) -> Result<f32, SaveError> {
    let mut buf = [0u8; 4];
    r.read_exact(&mut buf)?;
    Ok(f32::from_le_bytes(buf))
}

/// Read a 0/1 boolean byte.
pub fn read_bool(r: &mut dyn Read, what: &str) -> Result<bool, SaveError> {
    match read_u8(r)? {
        0 => Ok(false),
        1 => Ok(true),
        other => Err(SaveError::MalformedRecord {
            detail: format!("{what}: expected 0 or 1, got {other}"),
        }),
    }
}

// ── State encode/decode ─────────────────────────────────────────

/// Exact encoded size of a `width x height` state.
///
/// Saturates at `usize::MAX` for absurd dimensions, which can then never
/// match a real blob.
pub fn encoded_len(width: u32, height: u32) -> usize {
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|cells| cells.checked_mul(NODE_RECORD_LEN))
        .and_then(|body| body.checked_add(HEADER_LEN))
        .unwrap_or(usize::MAX)
}

/// Encode one node record.
pub fn encode_node(w: &mut dyn Write, node: &Node) -> Result<(), SaveError> {
    write_u32_le(w, node.id().0)?;
    write_u8(w, node.kind.tag())?;
    write_u32_le(w, node.value)?;
    write_bool(w, node.alive)?;
    write_u16_le(w, node.reads)?;
    write_u16_le(w, node.writes)?;
    write_bool(w, node.ready)?;
    write_i32_le(w, node.rect.x)?;
    write_i32_le(w, node.rect.y)?;
    write_u32_le(w, node.rect.w)?;
    write_u32_le(w, node.rect.h)?;
    write_u32_le(w, node.color.0)?;
    write_u32_le(w, node.target_color.0)?;
    Ok(())
}

/// Decode one node record, checking it belongs in `slot`.
pub fn decode_node(r: &mut dyn Read, slot: usize) -> Result<Node, SaveError> {
    let id = read_u32_le(r)?;
    if id as usize != slot {
        return Err(SaveError::MalformedRecord {
            detail: format!("record {slot} carries node id {id}"),
        });
    }
    let kind = NodeKind::try_from(read_u8(r)?)
        .map_err(|source| SaveError::UnknownKind { slot, source })?;
    let value = read_u32_le(r)?;
    let alive = read_bool(r, "alive")?;
    let reads = read_u16_le(r)?;
    let writes = read_u16_le(r)?;
    let ready = read_bool(r, "ready")?;
    let rect = Rect::new(
        read_i32_le(r)?,
        read_i32_le(r)?,
        read_u32_le(r)?,
        read_u32_le(r)?,
    );
    let color = Color(read_u32_le(r)?);
    let target_color = Color(read_u32_le(r)?);

    let mut node = Node::new(NodeId(id), rect);
    node.kind = kind;
    node.value = value;
    node.alive = alive;
    node.reads = reads;
    node.writes = writes;
    node.ready = ready;
    node.color = color;
    node.target_color = target_color;
    Ok(node)
}

/// Encode a full state blob.
///
/// Fails with [`SaveError::MalformedRecord`] if the node count does not
/// match the declared dimensions, since such a blob could never be loaded.
pub fn encode_state(w: &mut dyn Write, state: &SavedState) -> Result<(), SaveError> {
    let cells = (state.width as usize).saturating_mul(state.height as usize);
    if state.nodes.len() != cells {
        return Err(SaveError::MalformedRecord {
            detail: format!(
                "{}x{} grid declares {cells} nodes but holds {}",
                state.width,
                state.height,
                state.nodes.len()
            ),
        });
    }

    w.write_all(&MAGIC)?;
    write_u8(w, FORMAT_VERSION)?;
    write_u32_le(w, state.width)?;
    write_u32_le(w, state.height)?;
    write_f32_le(w, state.timer)?;
    write_f32_le(w, state.bpm)?;
    write_u64_le(w, state.tick)?;
    write_bool(w, state.paused)?;

    for node in &state.nodes {
        encode_node(w, node)?;
    }
    Ok(())
}

/// Decode a state blob destined for a `width x height` grid.
///
/// The length check comes first: a blob of any other size is rejected
/// with [`SaveError::SizeMismatch`] before a single field is read.
pub fn decode_state(bytes: &[u8], width: u32, height: u32) -> Result<SavedState, SaveError> {
    let expected = encoded_len(width, height);
    if bytes.len() != expected {
        return Err(SaveError::SizeMismatch {
            expected,
            found: bytes.len(),
        });
    }

    let mut r = bytes;
    let mut magic = [0u8; 4];
    r.read_exact(&mut magic)?;
    if magic != MAGIC {
        return Err(SaveError::InvalidMagic);
    }
    let version = read_u8(&mut r)?;
    if version != FORMAT_VERSION {
        return Err(SaveError::UnsupportedVersion { found: version });
    }
    let found = (read_u32_le(&mut r)?, read_u32_le(&mut r)?);
    if found != (width, height) {
        return Err(SaveError::DimensionMismatch {
            expected: (width, height),
            found,
        });
    }

    let timer = read_f32_le(&mut r)?;
    let bpm = read_f32_le(&mut r)?;
    if !timer.is_finite() || !bpm.is_finite() || bpm <= 0.0 {
        return Err(SaveError::MalformedRecord {
            detail: format!("invalid scheduler state: timer={timer}, bpm={bpm}"),
        });
    }
    let tick = read_u64_le(&mut r)?;
    let paused = read_bool(&mut r, "paused")?;

    let cells = width as usize * height as usize;
    let mut nodes = Vec::with_capacity(cells);
    for slot in 0..cells {
        nodes.push(decode_node(&mut r, slot)?);
    }

    Ok(SavedState {
        width,
        height,
        timer,
        bpm,
        tick,
        paused,
        nodes,
    })
}
