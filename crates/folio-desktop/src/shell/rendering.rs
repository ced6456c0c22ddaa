//! Frames handed to the host for drawing

use serde::Serialize;
use crate::math::Rect;
use crate::transition::Transform;
use crate::window::AppId;
use super::DesktopShell;

/// One window as it should be drawn this frame
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WindowFrame {
    pub id: AppId,
    pub title: String,
    /// Layout rectangle, maximize transitions already applied
    pub rect: Rect,
    /// Fly-to-dock offset, identity otherwise
    #[serde(skip)]
    pub transform: Transform,
    pub focused: bool,
    pub maximized: bool,
    /// Title bar drawn (false while a maximized window keeps its chrome hidden)
    pub chrome_visible: bool,
}

impl DesktopShell {
    /// Visible windows sorted back to front
    pub fn frames(&self, now_ms: f64) -> Vec<WindowFrame> {
        let focused = self.frontmost().map(|w| w.id.clone());

        let mut visible: Vec<_> = self.windows.iter().filter(|w| w.is_visible()).collect();
        visible.sort_by_key(|w| w.z_order);

        visible
            .into_iter()
            .filter_map(|w| {
                let controller = self.controllers.get(&w.id)?;
                Some(WindowFrame {
                    id: w.id.clone(),
                    title: w.title.clone(),
                    rect: controller.display_rect(w, self.viewport, now_ms),
                    transform: controller.transform(now_ms),
                    focused: focused.as_deref() == Some(w.id.as_str()),
                    maximized: w.is_maximized,
                    chrome_visible: !w.is_maximized || controller.chrome().is_revealed(),
                })
            })
            .collect()
    }
}
