//! Zugplanung: klassische Hanoi-Rekursion.

/// Index eines Pols (0, 1 oder 2).
pub type PoleIndex = usize;

/// Ein einzelner Disk-Transfer zwischen zwei Polen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    /// Quell-Pol
    pub from: PoleIndex,
    /// Ziel-Pol
    pub to: PoleIndex,
}

/// Gibt den dritten Pol zurück, der weder Quelle noch Ziel ist.
pub fn spare_pole(from: PoleIndex, to: PoleIndex) -> PoleIndex {
    3 - from - to
}

/// Plant die optimale Zugfolge für `disk_count` Disks von `from` nach `to`.
///
/// Liefert exakt `2^disk_count − 1` Züge. Jedes Präfix der Folge hält die
/// Stapel-Invariante (größere Disks immer unter kleineren).
pub fn plan_moves(disk_count: usize, from: PoleIndex, to: PoleIndex) -> Vec<Move> {
    let mut moves = Vec::with_capacity((1usize << disk_count.min(24)) - 1);
    plan_into(&mut moves, disk_count, from, to);
    moves
}

fn plan_into(moves: &mut Vec<Move>, disk_count: usize, from: PoleIndex, to: PoleIndex) {
    if disk_count == 0 {
        return;
    }
    let spare = spare_pole(from, to);
    plan_into(moves, disk_count - 1, from, spare);
    moves.push(Move { from, to });
    plan_into(moves, disk_count - 1, spare, to);
}
