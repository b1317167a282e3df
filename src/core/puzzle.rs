//! Puzzle-Zustand: Disk-Tabelle und die drei Pol-Stapel.

use super::layout;
use glam::Vec2;

/// Index einer Disk in der Disk-Tabelle des Puzzles.
/// Disk 0 ist die größte; die Breite fällt mit dem Index.
pub type DiskId = usize;

/// Eine Disk mit fester Breite und aktueller Bildschirmposition.
/// `pos` ist die linke obere Ecke des Disk-Rechtecks.
#[derive(Debug, Clone, Copy)]
pub struct Disk {
    /// Breite in Szenen-Pixeln
    pub width: f32,
    /// Aktuelle Position (linke obere Ecke)
    pub pos: Vec2,
}

/// Disk-Tabelle plus drei Stapel; oberste Disk = letztes Element.
#[derive(Debug, Clone)]
pub struct Puzzle {
    /// Alle Disks, indiziert per [`DiskId`]
    pub disks: Vec<Disk>,
    /// Die drei Pol-Stapel
    pub stacks: [Vec<DiskId>; 3],
}

impl Puzzle {
    /// Baut ein frisches Puzzle: alle Disks gestapelt auf Pol 0.
    ///
    /// Breiten beginnen bei [`layout::DISK_BASE_WIDTH`] und fallen pro Disk um
    /// [`layout::DISK_WIDTH_STEP`]. Erzeugung stoppt an der Breiten-Untergrenze,
    /// auch wenn `requested_disks` größer ist.
    pub fn new(requested_disks: usize) -> Self {
        let mut puzzle = Self {
            disks: Vec::new(),
            stacks: [Vec::new(), Vec::new(), Vec::new()],
        };

        let mut width = layout::DISK_BASE_WIDTH;
        for _ in 0..requested_disks {
            if width <= layout::DISK_MIN_WIDTH {
                break;
            }
            let id = puzzle.disks.len();
            let stack_height = puzzle.stacks[0].len() + 1;
            puzzle.disks.push(Disk {
                width,
                pos: layout::disk_rest_pos(0, width, stack_height),
            });
            puzzle.stacks[0].push(id);
            width -= layout::DISK_WIDTH_STEP;
        }

        puzzle
    }

    /// Anzahl der tatsächlich erzeugten Disks.
    pub fn disk_count(&self) -> usize {
        self.disks.len()
    }

    /// Aktuelle Stapelhöhe eines Pols.
    pub fn stack_height(&self, pole: usize) -> usize {
        self.stacks[pole].len()
    }

    /// Nimmt die oberste Disk von einem Pol.
    pub fn pop_disk(&mut self, pole: usize) -> Option<DiskId> {
        self.stacks[pole].pop()
    }

    /// Legt eine Disk oben auf einen Pol.
    pub fn push_disk(&mut self, pole: usize, disk: DiskId) {
        self.stacks[pole].push(disk);
    }

    /// Prüft die Ordnungs-Invariante: auf jedem Pol fallen die Disk-Breiten
    /// von unten nach oben streng.
    pub fn is_ordered(&self) -> bool {
        self.stacks.iter().all(|stack| {
            stack
                .windows(2)
                .all(|w| self.disks[w[0]].width > self.disks[w[1]].width)
        })
    }
}
