//! Element-wise evaluation over scalar-or-sequence arguments.

use crate::value::{Arg, Evaluated, Orientation};
use tp_core::{PropsError, PropsResult};

/// Evaluate `eval` once per output index.
///
/// Each entry of `args` is `(label, argument)`; labels name sequences in a
/// [`PropsError::ShapeMismatch`]. All sequence arguments must share one
/// length, checked before any evaluation. Scalars repeat at every index.
///
/// The first failing element aborts the batch; a computation failure is
/// tagged with its index. The result is a row when any sequence argument is
/// a row, otherwise a column. With no sequence arguments `eval` runs once and
/// a scalar comes back.
pub fn broadcast<const N: usize>(
    args: [(&'static str, &Arg); N],
    mut eval: impl FnMut([f64; N]) -> PropsResult<f64>,
) -> PropsResult<Evaluated> {
    let lengths: Vec<(&'static str, usize)> = args
        .iter()
        .filter_map(|(label, arg)| arg.sequence_len().map(|n| (*label, n)))
        .collect();

    let Some(&(_, len)) = lengths.first() else {
        return eval(args.map(|(_, arg)| arg.at(0))).map(Evaluated::Scalar);
    };
    if lengths.iter().any(|&(_, n)| n != len) {
        tracing::debug!(?lengths, "sequence arguments disagree in length");
        return Err(PropsError::ShapeMismatch { lengths });
    }

    let orientation = if args
        .iter()
        .any(|(_, arg)| arg.orientation() == Some(Orientation::Row))
    {
        Orientation::Row
    } else {
        Orientation::Column
    };
    tracing::debug!(len, ?orientation, "broadcast evaluation");

    let mut out = Vec::with_capacity(len);
    for i in 0..len {
        let inputs = std::array::from_fn(|k| args[k].1.at(i));
        out.push(eval(inputs).map_err(|e| e.at_index(i))?);
    }
    Ok(Evaluated::sequence(out, orientation))
}
