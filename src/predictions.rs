use std::collections::HashMap;

use crate::fixture::Fixture;
use crate::score::Score;

#[derive(Debug, Clone, Default)]
pub struct Player {
    pub name: String,
    pub total: u32,
    pub predictions: Vec<Fixture>,
    // Index of the real fixture behind each prediction.
    sources: Vec<usize>,
}

impl Player {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Self::default()
        }
    }

    pub fn scored<'a>(
        &'a self,
        fixtures: &'a [Fixture],
    ) -> impl Iterator<Item = (&'a Fixture, &'a Fixture)> + 'a {
        self.sources
            .iter()
            .zip(&self.predictions)
            .filter_map(move |(idx, guess)| fixtures.get(*idx).map(|actual| (actual, guess)))
    }
}

#[derive(Debug, Clone, Default)]
pub struct PredictionBook {
    players: Vec<Player>,
    index: HashMap<String, usize>,
}

impl PredictionBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// `source` is the index of `actual` in the league's fixture list.
    pub fn record(
        &mut self,
        player: &str,
        source: usize,
        actual: &Fixture,
        predicted: Score,
    ) -> u32 {
        let points = actual.score.compare(&predicted);
        let entry = self.entry(player);
        entry.total += points;
        entry.predictions.push(actual.prediction(predicted, points));
        entry.sources.push(source);
        points
    }

    fn entry(&mut self, name: &str) -> &mut Player {
        let idx = match self.index.get(name) {
            Some(idx) => *idx,
            None => {
                let idx = self.players.len();
                self.players.push(Player::new(name));
                self.index.insert(name.to_string(), idx);
                idx
            }
        };
        &mut self.players[idx]
    }

    pub fn get(&self, name: &str) -> Option<&Player> {
        self.index.get(name).map(|idx| &self.players[*idx])
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn names(&self) -> Vec<String> {
        self.players.iter().map(|p| p.name.clone()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}
