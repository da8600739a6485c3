// Verifier - 保存則の検証機能

use crate::core::{StreamTotals, VerificationError};

/// パイプライン完走後の3つの不変条件を検証
///
/// 1. 生成個数 == 収集個数
/// 2. 生成合計 == 収集合計
/// 3. レーン別集計の合計 == 生成個数
///
/// 最初に破れた不変条件を、衝突した両側の値とともに返す。
/// 違反はロジックまたは並行性の正しさのバグを意味するため常に致命的で、
/// 再試行は行わない。
pub fn verify(
    generated: &StreamTotals,
    collected: &StreamTotals,
    lane_tallies: &[u64],
) -> Result<(), VerificationError> {
    if generated.count != collected.count {
        return Err(VerificationError::CountMismatch {
            generated: generated.count,
            collected: collected.count,
        });
    }

    if generated.sum != collected.sum {
        return Err(VerificationError::SumMismatch {
            generated: generated.sum,
            collected: collected.sum,
        });
    }

    let tally_total: u64 = lane_tallies.iter().sum();
    if tally_total != generated.count {
        return Err(VerificationError::TallyMismatch {
            tally_total,
            generated: generated.count,
        });
    }

    Ok(())
}
