//! Aligning selected objects against each other.

use serde::{Deserialize, Serialize};

use super::LabelDocument;
use crate::model::{LabelObject, Region};

/// Edge or center line to align the selection on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Alignment {
    Left,
    HCenter,
    Right,
    Top,
    VCenter,
    Bottom,
}

impl Alignment {
    pub fn name(self) -> &'static str {
        match self {
            Self::Left => "Align Left",
            Self::HCenter => "Align Horizontal Center",
            Self::Right => "Align Right",
            Self::Top => "Align Top",
            Self::VCenter => "Align Vertical Center",
            Self::Bottom => "Align Bottom",
        }
    }
}

impl<O: LabelObject> LabelDocument<O> {
    /// Computes the translation each selected object needs for `alignment`.
    ///
    /// Returns `(z_index, dx, dy)` for every selected object, including those
    /// already in place. Empty when fewer than two objects are selected.
    pub fn calculate_alignment_deltas(&self, alignment: Alignment) -> Vec<(usize, f64, f64)> {
        let selected: Vec<(usize, Region)> = self
            .objects
            .iter()
            .enumerate()
            .filter(|(_, o)| o.is_selected())
            .map(|(i, o)| (i, o.extent().normalized()))
            .collect();
        if selected.len() < 2 {
            return Vec::new();
        }

        let target = match alignment {
            Alignment::Left => selected
                .iter()
                .map(|(_, r)| r.x1)
                .fold(f64::INFINITY, f64::min),
            Alignment::Right => selected
                .iter()
                .map(|(_, r)| r.x2)
                .fold(f64::NEG_INFINITY, f64::max),
            Alignment::Top => selected
                .iter()
                .map(|(_, r)| r.y1)
                .fold(f64::INFINITY, f64::min),
            Alignment::Bottom => selected
                .iter()
                .map(|(_, r)| r.y2)
                .fold(f64::NEG_INFINITY, f64::max),
            Alignment::HCenter => {
                nearest_to_mean(selected.iter().map(|(_, r)| r.center_x()))
            }
            Alignment::VCenter => {
                nearest_to_mean(selected.iter().map(|(_, r)| r.center_y()))
            }
        };

        selected
            .into_iter()
            .map(|(index, r)| {
                let (dx, dy) = match alignment {
                    Alignment::Left => (target - r.x1, 0.0),
                    Alignment::Right => (target - r.x2, 0.0),
                    Alignment::HCenter => (target - r.center_x(), 0.0),
                    Alignment::Top => (0.0, target - r.y1),
                    Alignment::Bottom => (0.0, target - r.y2),
                    Alignment::VCenter => (0.0, target - r.center_y()),
                };
                (index, dx, dy)
            })
            .collect()
    }

    /// Aligns the selection. Does nothing unless at least two objects are
    /// selected.
    pub fn align_selection(&mut self, alignment: Alignment) {
        let deltas = self.calculate_alignment_deltas(alignment);
        if deltas.is_empty() {
            tracing::trace!("{}: fewer than two objects selected", alignment.name());
            return;
        }

        for (index, dx, dy) in deltas {
            self.objects[index].set_position_relative(dx, dy);
            self.forward_object_notifications(index);
        }
        tracing::debug!("{}", alignment.name());
        self.commit();
    }

    pub fn align_selection_left(&mut self) {
        self.align_selection(Alignment::Left);
    }

    pub fn align_selection_right(&mut self) {
        self.align_selection(Alignment::Right);
    }

    pub fn align_selection_top(&mut self) {
        self.align_selection(Alignment::Top);
    }

    pub fn align_selection_bottom(&mut self) {
        self.align_selection(Alignment::Bottom);
    }

    /// Lines up horizontal centers on the object closest to the mean center.
    pub fn align_selection_hcenter(&mut self) {
        self.align_selection(Alignment::HCenter);
    }

    /// Lines up vertical centers on the object closest to the mean center.
    pub fn align_selection_vcenter(&mut self) {
        self.align_selection(Alignment::VCenter);
    }
}

/// The center closest to the mean of `centers`; the first of equally close
/// centers wins.
fn nearest_to_mean(centers: impl Iterator<Item = f64> + Clone) -> f64 {
    let (sum, n) = centers.clone().fold((0.0, 0usize), |(s, n), c| (s + c, n + 1));
    let mean = sum / n as f64;

    let mut rest = centers;
    let Some(mut best) = rest.next() else {
        return 0.0;
    };
    let mut best_distance = (mean - best).abs();
    for center in rest {
        let distance = (mean - center).abs();
        if distance < best_distance {
            best_distance = distance;
            best = center;
        }
    }
    best
}
