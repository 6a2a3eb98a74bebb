//! Geometric transforms applied to every selected object.

use super::LabelDocument;
use crate::model::LabelObject;

impl<O: LabelObject> LabelDocument<O> {
    /// Rotates each selected object about its own center.
    pub fn rotate_selection(&mut self, theta_degs: f64) {
        self.for_each_selected(|o| o.rotate(theta_degs));
        self.commit();
    }

    pub fn rotate_selection_left(&mut self) {
        self.rotate_selection(-90.0);
    }

    pub fn rotate_selection_right(&mut self) {
        self.rotate_selection(90.0);
    }

    pub fn flip_selection_horiz(&mut self) {
        self.for_each_selected(|o| o.flip_horiz());
        self.commit();
    }

    pub fn flip_selection_vert(&mut self) {
        self.for_each_selected(|o| o.flip_vert());
        self.commit();
    }

    pub fn move_selection(&mut self, dx: f64, dy: f64) {
        self.for_each_selected(|o| o.set_position_relative(dx, dy));
        self.commit();
    }

    /// Centers each selected object horizontally on the label.
    pub fn center_selection_horiz(&mut self) {
        let Some(width) = self.width() else {
            tracing::warn!("Cannot center selection horizontally without a template");
            return;
        };
        let x_label_center = width / 2.0;

        self.for_each_selected(|o| {
            let dx = x_label_center - o.extent().center_x();
            o.set_position_relative(dx, 0.0);
        });
        self.commit();
    }

    /// Centers each selected object vertically on the label.
    pub fn center_selection_vert(&mut self) {
        let Some(height) = self.height() else {
            tracing::warn!("Cannot center selection vertically without a template");
            return;
        };
        let y_label_center = height / 2.0;

        self.for_each_selected(|o| {
            let dy = y_label_center - o.extent().center_y();
            o.set_position_relative(0.0, dy);
        });
        self.commit();
    }
}
