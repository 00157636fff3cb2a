//! Test doubles shared by the unit tests.

use crate::error::{ClivmError, Result};
use crate::linker::Linker;
use crate::prompt::{Choice, Prompter};
use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap, VecDeque};

/// Symlinks kept in a map. `fail_activate` / `fail_deactivate` make those calls fail.
#[derive(Default)]
pub struct FakeLinker {
    links: RefCell<BTreeMap<String, String>>,
    pub fail_activate: Cell<bool>,
    pub fail_deactivate: Cell<bool>,
}

fn denied(name: &str) -> ClivmError {
    ClivmError::fs(
        "changing symlink",
        name,
        std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
    )
}

impl FakeLinker {
    pub fn target(&self, name: &str) -> Option<String> {
        self.links.borrow().get(name).cloned()
    }
}

impl Linker for FakeLinker {
    fn activate(&self, name: &str, version: &str) -> Result<()> {
        if self.fail_activate.get() {
            return Err(denied(name));
        }
        self.links
            .borrow_mut()
            .insert(name.to_string(), version.to_string());
        Ok(())
    }

    fn deactivate(&self, name: &str) -> Result<()> {
        if self.fail_deactivate.get() {
            return Err(denied(name));
        }
        self.links.borrow_mut().remove(name);
        Ok(())
    }

    fn current(&self, name: &str) -> Result<Option<String>> {
        Ok(self.target(name))
    }
}

/// Answers prompts from a queue and records what was asked.
/// `None` in the queue answers with `Cancelled`.
#[derive(Default)]
pub struct ScriptedPrompter {
    answers: RefCell<VecDeque<Option<String>>>,
    pub asked: RefCell<Vec<(String, Vec<Choice>, usize)>>,
}

impl ScriptedPrompter {
    pub fn answering<'a>(answers: impl IntoIterator<Item = Option<&'a str>>) -> Self {
        Self {
            answers: RefCell::new(answers.into_iter().map(|a| a.map(str::to_string)).collect()),
            asked: RefCell::default(),
        }
    }

    fn next(&self) -> Result<String> {
        self.answers
            .borrow_mut()
            .pop_front()
            .flatten()
            .ok_or(ClivmError::Cancelled)
    }
}

impl Prompter for ScriptedPrompter {
    fn select(&self, question: &str, choices: &[Choice], default: usize) -> Result<String> {
        self.asked
            .borrow_mut()
            .push((question.to_string(), choices.to_vec(), default));
        self.next()
    }

    fn input(&self, question: &str, default: Option<&str>) -> Result<String> {
        let fallback = default.map(Choice::plain).into_iter().collect();
        self.asked
            .borrow_mut()
            .push((question.to_string(), fallback, 0));
        self.next()
    }
}
