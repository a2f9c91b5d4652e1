//! Semantic cleanup: reduce edit-script fragmentation for human review.
//!
//! A raw word- or character-level diff of a rewritten clause tends to come
//! out as many alternating tiny insert/delete runs. Cleanup rechunks the
//! script without changing the net transformation:
//!
//! - adjacent operations of the same kind are coalesced;
//! - within a changed region, deletions are ordered before insertions;
//! - common prefixes and suffixes of a delete/insert pair are factored out
//!   into the neighboring equalities (a pair differing only in whitespace
//!   shrinks to its whitespace residue);
//! - a short equality sandwiched between edits, no longer than the edits on
//!   either side, is absorbed into the surrounding edit as a paired
//!   delete+insert of the same text.
//!
//! Both input and output satisfy the script invariant, and the passes run
//! to a fixed point, so cleanup is idempotent.

use crate::script::{DiffOp, EditScript};

/// Upper bound on absorb/merge rounds. Real scripts converge in one or two.
const MAX_PASSES: usize = 8;

/// Rechunk `script` for readability while preserving its reconstruction
/// guarantees exactly.
pub fn cleanup_semantic(script: EditScript) -> EditScript {
    let mut ops = merge_ops(script.ops);
    let mut passes = 0;
    for _ in 0..MAX_PASSES {
        let (absorbed, changed) = absorb_small_equalities(ops);
        ops = merge_ops(absorbed);
        passes += 1;
        if !changed {
            break;
        }
    }
    tracing::debug!(passes, ops = ops.len(), "semantic cleanup complete");
    EditScript::from(ops)
}

/// One merge pass: drop empty fragments, coalesce runs of the same kind,
/// order deletions before insertions within each changed region, and factor
/// common prefixes/suffixes of delete/insert pairs into equalities.
///
/// Idempotent: merging an already-merged script changes nothing.
fn merge_ops(ops: Vec<DiffOp>) -> Vec<DiffOp> {
    let mut out: Vec<DiffOp> = Vec::with_capacity(ops.len());
    let mut del = String::new();
    let mut ins = String::new();

    for op in ops {
        match op {
            DiffOp::Delete(t) => del.push_str(&t),
            DiffOp::Insert(t) => ins.push_str(&t),
            DiffOp::Equal(t) => {
                flush_edits(&mut out, &mut del, &mut ins);
                push_equal(&mut out, &t);
            }
        }
    }
    flush_edits(&mut out, &mut del, &mut ins);
    out
}

/// Emit the pending delete/insert pair, factoring shared affixes first.
fn flush_edits(out: &mut Vec<DiffOp>, del: &mut String, ins: &mut String) {
    if del.is_empty() && ins.is_empty() {
        return;
    }

    let mut suffix = String::new();
    if !del.is_empty() && !ins.is_empty() {
        let prefix_len = common_prefix_len(del, ins);
        if prefix_len > 0 {
            push_equal(out, &del[..prefix_len]);
            del.replace_range(..prefix_len, "");
            ins.replace_range(..prefix_len, "");
        }
        let suffix_len = common_suffix_len(del, ins);
        if suffix_len > 0 {
            suffix = del.split_off(del.len() - suffix_len);
            ins.truncate(ins.len() - suffix_len);
        }
    }

    if !del.is_empty() {
        out.push(DiffOp::Delete(std::mem::take(del)));
    }
    if !ins.is_empty() {
        out.push(DiffOp::Insert(std::mem::take(ins)));
    }
    del.clear();
    ins.clear();
    push_equal(out, &suffix);
}

/// Append equal text, merging with a trailing equality if present.
fn push_equal(out: &mut Vec<DiffOp>, text: &str) {
    if text.is_empty() {
        return;
    }
    if let Some(DiffOp::Equal(prev)) = out.last_mut() {
        prev.push_str(text);
    } else {
        out.push(DiffOp::Equal(text.to_string()));
    }
}

/// One absorption pass over a merged script: equalities flanked by edits on
/// both sides and no longer than either flank become a paired delete+insert
/// of the same text, which the next merge pass folds into the neighbors.
fn absorb_small_equalities(ops: Vec<DiffOp>) -> (Vec<DiffOp>, bool) {
    let absorb: Vec<bool> = (0..ops.len())
        .map(|i| match &ops[i] {
            DiffOp::Equal(t) => {
                let eq = t.chars().count();
                let before = edit_run_weight(ops[..i].iter().rev());
                let after = edit_run_weight(ops[i + 1..].iter());
                before > 0 && after > 0 && eq <= before && eq <= after
            }
            _ => false,
        })
        .collect();

    let mut changed = false;
    let mut out: Vec<DiffOp> = Vec::with_capacity(ops.len());
    for (i, op) in ops.into_iter().enumerate() {
        match op {
            DiffOp::Equal(t) if absorb[i] => {
                out.push(DiffOp::Delete(t.clone()));
                out.push(DiffOp::Insert(t));
                changed = true;
            }
            other => out.push(other),
        }
    }
    (out, changed)
}

/// Weight of the contiguous edit run at the start of `ops`: the larger of
/// its deleted and inserted character counts. Zero when `ops` starts with
/// an equality.
fn edit_run_weight<'a>(ops: impl Iterator<Item = &'a DiffOp>) -> usize {
    let mut deleted = 0;
    let mut inserted = 0;
    for op in ops {
        match op {
            DiffOp::Delete(t) => deleted += t.chars().count(),
            DiffOp::Insert(t) => inserted += t.chars().count(),
            DiffOp::Equal(_) => break,
        }
    }
    deleted.max(inserted)
}

/// Byte length of the longest common prefix, on char boundaries.
fn common_prefix_len(a: &str, b: &str) -> usize {
    let mut len = 0;
    for (ca, cb) in a.chars().zip(b.chars()) {
        if ca != cb {
            break;
        }
        len += ca.len_utf8();
    }
    len
}

/// Byte length of the longest common suffix, on char boundaries.
fn common_suffix_len(a: &str, b: &str) -> usize {
    let mut len = 0;
    for (ca, cb) in a.chars().rev().zip(b.chars().rev()) {
        if ca != cb {
            break;
        }
        len += ca.len_utf8();
    }
    len
}
