// src/form.rs
//
// The form the user fills in. State only changes through `FormState::apply`,
// which returns a fresh value and leaves the old one untouched.
use crate::config::consts::{DEFAULT_DOMAINS, DEFAULT_GATEWAYS};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormState {
    pub product_name: String,
    /// Insertion order, no duplicates
    pub selected_gateways: Vec<String>,
    pub custom_gateway_draft: String,
    /// Insertion order, no duplicates
    pub domain_suffixes: Vec<String>,
    pub free_keywords: String,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            product_name: s!(),
            selected_gateways: DEFAULT_GATEWAYS.iter().map(|g| s!(*g)).collect(),
            custom_gateway_draft: s!(),
            domain_suffixes: DEFAULT_DOMAINS.iter().map(|d| s!(*d)).collect(),
            free_keywords: s!(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormEvent {
    SetProductName(String),
    ToggleGateway { name: String, on: bool },
    SetCustomGateway(String),
    AddCustomGateway,
    ToggleDomain { suffix: String, on: bool },
    SetKeywords(String),
}

impl FormState {
    /// Blank state: nothing selected, nothing typed.
    pub fn empty() -> Self {
        Self {
            product_name: s!(),
            selected_gateways: Vec::new(),
            custom_gateway_draft: s!(),
            domain_suffixes: Vec::new(),
            free_keywords: s!(),
        }
    }

    pub fn has_gateway(&self, name: &str) -> bool {
        self.selected_gateways.iter().any(|g| g == name)
    }

    pub fn has_domain(&self, suffix: &str) -> bool {
        self.domain_suffixes.iter().any(|d| d == suffix)
    }

    /// Draft as it goes into the query: any non-empty text, verbatim.
    pub fn custom_gateway_term(&self) -> Option<&str> {
        Some(self.custom_gateway_draft.as_str()).filter(|d| !d.is_empty())
    }

    /// Draft as "Add Gateway" would take it: `None` when blank or already selected.
    pub fn pending_custom_gateway(&self) -> Option<&str> {
        let draft = self.custom_gateway_draft.as_str();
        if draft.trim().is_empty() || self.has_gateway(draft) {
            None
        } else {
            Some(draft)
        }
    }

    pub fn apply(&self, event: FormEvent) -> FormState {
        let mut next = self.clone();
        match event {
            FormEvent::SetProductName(name) => next.product_name = name,
            FormEvent::ToggleGateway { name, on } => toggle(&mut next.selected_gateways, name, on),
            FormEvent::SetCustomGateway(draft) => next.custom_gateway_draft = draft,
            FormEvent::AddCustomGateway => {
                if let Some(draft) = self.pending_custom_gateway() {
                    next.selected_gateways.push(s!(draft));
                    next.custom_gateway_draft.clear();
                }
            }
            FormEvent::ToggleDomain { suffix, on } => toggle(&mut next.domain_suffixes, suffix, on),
            FormEvent::SetKeywords(text) => next.free_keywords = text,
        }
        next
    }
}

fn toggle(list: &mut Vec<String>, item: String, on: bool) {
    if on {
        if !list.contains(&item) {
            list.push(item);
        }
    } else {
        list.retain(|x| *x != item);
    }
}
