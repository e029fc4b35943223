use std::cmp::Ordering;
use std::collections::HashMap;

use crate::score::Outcome;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TeamId(usize);

#[derive(Debug, Clone, Default)]
pub struct Team {
    pub name: String,
    pub won: u32,
    pub drawn: u32,
    pub lost: u32,
    pub goals_for: u32,
    pub goals_against: u32,
}

impl Team {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Applies one played fixture. Not idempotent: call once per fixture.
    pub fn record(&mut self, goals_for: u32, goals_against: u32, outcome: Outcome) {
        match outcome {
            Outcome::Win => self.won += 1,
            Outcome::Draw => self.drawn += 1,
            Outcome::Lose => self.lost += 1,
            Outcome::Invalid => return,
        }
        self.goals_for = self.goals_for.saturating_add(goals_for);
        self.goals_against = self.goals_against.saturating_add(goals_against);
    }

    pub fn played(&self) -> u32 {
        self.won + self.drawn + self.lost
    }

    pub fn points(&self) -> u32 {
        self.won * 3 + self.drawn
    }

    pub fn goal_diff(&self) -> i64 {
        i64::from(self.goals_for) - i64::from(self.goals_against)
    }
}

/// League table order: points, goal difference, goals scored, then name.
/// Every key is descending, so level teams end up in reverse alphabetical order.
pub fn standings_order(a: &Team, b: &Team) -> Ordering {
    b.points()
        .cmp(&a.points())
        .then_with(|| b.goal_diff().cmp(&a.goal_diff()))
        .then_with(|| b.goals_for.cmp(&a.goals_for))
        .then_with(|| b.name.cmp(&a.name))
}

#[derive(Debug, Clone, Default)]
pub struct Teams {
    teams: Vec<Team>,
    by_name: HashMap<String, TeamId>,
}

impl Teams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn resolve(&mut self, name: &str) -> TeamId {
        if let Some(id) = self.by_name.get(name) {
            return *id;
        }
        let id = TeamId(self.teams.len());
        self.teams.push(Team::new(name));
        self.by_name.insert(name.to_string(), id);
        id
    }

    pub fn find(&self, name: &str) -> Option<&Team> {
        self.by_name.get(name).map(|id| self.get(*id))
    }

    pub fn get(&self, id: TeamId) -> &Team {
        &self.teams[id.0]
    }

    pub fn get_mut(&mut self, id: TeamId) -> &mut Team {
        &mut self.teams[id.0]
    }

    pub fn name(&self, id: TeamId) -> &str {
        &self.get(id).name
    }

    pub fn len(&self) -> usize {
        self.teams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Team> {
        self.teams.iter()
    }

    pub fn sorted_by_name(&self) -> Vec<&Team> {
        let mut out: Vec<&Team> = self.teams.iter().collect();
        out.sort_by(|a, b| a.name.cmp(&b.name));
        out
    }

    pub fn standings<'a>(&'a self, names: impl IntoIterator<Item = &'a str>) -> Vec<&'a Team> {
        let mut out: Vec<&Team> = names.into_iter().filter_map(|n| self.find(n)).collect();
        out.sort_by(|a, b| standings_order(a, b));
        out
    }
}
