// src/roster.rs
use std::collections::HashMap;
use std::hash::Hash;

use crate::model::{Student, YearKey};

/// Key → students, remembering the order keys were first seen.
#[derive(Clone, Debug)]
pub struct Grouping<K> {
    order: Vec<K>,
    lists: HashMap<K, Vec<Student>>,
}

impl<K: Eq + Hash> PartialEq for Grouping<K> {
    fn eq(&self, other: &Self) -> bool {
        self.order == other.order && self.lists == other.lists
    }
}

impl<K: Eq + Hash> Eq for Grouping<K> {}

impl<K> Default for Grouping<K> {
    fn default() -> Self {
        Self { order: Vec::new(), lists: HashMap::new() }
    }
}

impl<K: Eq + Hash + Clone> Grouping<K> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, key: K, student: Student) {
        match self.lists.get_mut(&key) {
            Some(list) => list.push(student),
            None => {
                self.order.push(key.clone());
                self.lists.insert(key, vec![student]);
            }
        }
    }

    pub fn get(&self, key: &K) -> Option<&[Student]> {
        self.lists.get(key).map(Vec::as_slice)
    }

    /// Keys in first-seen order.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.order.iter()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, &[Student])> {
        self.order
            .iter()
            .filter_map(|k| self.lists.get(k).map(|v| (k, v.as_slice())))
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Number of students across all lists.
    pub fn total(&self) -> usize {
        self.lists.values().map(Vec::len).sum()
    }
}

/// The two views of one extraction.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Rosters {
    pub by_year: Grouping<YearKey>,
    pub by_advisor: Grouping<String>,
}

impl Rosters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, student: Student) {
        self.by_advisor.push(student.advisor().to_string(), student.clone());
        self.by_year.push(student.year().clone(), student);
    }

    pub fn student_count(&self) -> usize {
        self.by_year.total()
    }

    /// Every student once, in year first-seen order then row order.
    pub fn students(&self) -> impl Iterator<Item = &Student> {
        self.by_year.iter().flat_map(|(_, list)| list.iter())
    }
}
