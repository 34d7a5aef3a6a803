// In-memory page model - the element handles the controller writes to
use crate::domain::chart::ChartConfig;
use std::collections::HashMap;

pub const DELETE_CONFIRM_MESSAGE: &str = "Are you sure you want to delete this item?";

/// Seam for blocking confirmation dialogs.
pub trait ConfirmPrompt {
    fn confirm(&self, message: &str) -> bool;
}

pub fn confirm_delete(prompt: &dyn ConfirmPrompt, message: Option<&str>) -> bool {
    prompt.confirm(message.unwrap_or(DELETE_CONFIRM_MESSAGE))
}

#[derive(Debug, Clone)]
pub struct FormControl {
    pub name: String,
    pub value: String,
    pub default_value: String,
    pub disabled: bool,
}

impl FormControl {
    pub fn new(name: &str, default_value: &str) -> Self {
        Self {
            name: name.to_string(),
            value: default_value.to_string(),
            default_value: default_value.to_string(),
            disabled: false,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Form {
    pub controls: Vec<FormControl>,
}

impl Form {
    pub fn reset(&mut self) {
        for control in &mut self.controls {
            control.value = control.default_value.clone();
        }
    }
}

/// Handle to a chart bound to one canvas. The controller owns these and
/// must destroy the old instance before mounting a replacement.
#[derive(Debug)]
pub struct ChartInstance {
    id: u64,
    canvas_id: String,
    pub config: ChartConfig,
}

#[derive(Debug, Default)]
struct Canvas {
    bound: Vec<u64>,
}

#[derive(Debug, Default)]
pub struct Page {
    texts: HashMap<String, String>,
    metas: HashMap<String, String>,
    forms: HashMap<String, Form>,
    canvases: HashMap<String, Canvas>,
    banners: Vec<String>,
    clipboard: Option<String>,
    clipboard_available: bool,
    next_chart_id: u64,
}

impl Page {
    pub fn new() -> Self {
        Self {
            clipboard_available: true,
            ..Default::default()
        }
    }

    pub fn with_element(mut self, id: &str) -> Self {
        self.texts.insert(id.to_string(), String::new());
        self
    }

    pub fn with_canvas(mut self, id: &str) -> Self {
        self.canvases.insert(id.to_string(), Canvas::default());
        self
    }

    pub fn with_form(mut self, id: &str, form: Form) -> Self {
        self.forms.insert(id.to_string(), form);
        self
    }

    pub fn with_meta(mut self, name: &str, content: &str) -> Self {
        self.metas.insert(name.to_string(), content.to_string());
        self
    }

    pub fn without_clipboard(mut self) -> Self {
        self.clipboard_available = false;
        self
    }

    pub fn meta(&self, name: &str) -> Option<&str> {
        self.metas.get(name).map(String::as_str)
    }

    /// Silent no-op when the id is absent. Display call sites do not guard
    /// their lookups; only the form helpers do.
    pub fn set_text(&mut self, id: &str, text: &str) {
        if let Some(slot) = self.texts.get_mut(id) {
            *slot = text.to_string();
        }
    }

    pub fn text(&self, id: &str) -> Option<&str> {
        self.texts.get(id).map(String::as_str)
    }

    pub fn set_form_disabled(&mut self, form_id: &str, disabled: bool) {
        let Some(form) = self.forms.get_mut(form_id) else {
            return;
        };
        for control in &mut form.controls {
            control.disabled = disabled;
        }
    }

    pub fn clear_form(&mut self, form_id: &str) {
        if let Some(form) = self.forms.get_mut(form_id) {
            form.reset();
        }
    }

    pub fn form(&self, id: &str) -> Option<&Form> {
        self.forms.get(id)
    }

    pub fn mount_chart(&mut self, canvas_id: &str, config: ChartConfig) -> Option<ChartInstance> {
        let Some(canvas) = self.canvases.get_mut(canvas_id) else {
            tracing::warn!("No canvas with id {canvas_id}, chart not mounted");
            return None;
        };

        self.next_chart_id += 1;
        let id = self.next_chart_id;
        canvas.bound.push(id);

        Some(ChartInstance {
            id,
            canvas_id: canvas_id.to_string(),
            config,
        })
    }

    pub fn destroy_chart(&mut self, instance: ChartInstance) {
        if let Some(canvas) = self.canvases.get_mut(&instance.canvas_id) {
            canvas.bound.retain(|&id| id != instance.id);
        }
    }

    /// Number of chart instances currently bound to a canvas.
    pub fn chart_count(&self, canvas_id: &str) -> usize {
        self.canvases.get(canvas_id).map_or(0, |c| c.bound.len())
    }

    /// Error banners go to the top of the page, newest first.
    pub fn insert_banner(&mut self, message: &str) {
        self.banners.insert(0, message.to_string());
    }

    pub fn dismiss_banner(&mut self, index: usize) {
        if index < self.banners.len() {
            self.banners.remove(index);
        }
    }

    pub fn banners(&self) -> &[String] {
        &self.banners
    }

    pub fn copy_to_clipboard(&mut self, text: &str) -> bool {
        if !self.clipboard_available {
            return false;
        }
        self.clipboard = Some(text.to_string());
        true
    }

    pub fn clipboard(&self) -> Option<&str> {
        self.clipboard.as_deref()
    }
}
