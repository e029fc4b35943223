use std::cmp::Ordering;
use std::fmt;

use chrono::NaiveDate;

use crate::score::Score;
use crate::team::{TeamId, Teams};

pub const DATE_FORMAT: &str = "%d/%m/%Y";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fixture {
    pub team_a: TeamId,
    pub team_b: TeamId,
    pub when: NaiveDate,
    pub group: String,
    pub score: Score,
    pub points: Option<u32>,
}

impl Fixture {
    pub fn new(
        team_a: TeamId,
        team_b: TeamId,
        when: NaiveDate,
        group: impl Into<String>,
        score: Score,
    ) -> Self {
        Self {
            team_a,
            team_b,
            when,
            group: group.into(),
            score,
            points: None,
        }
    }

    pub fn is_played(&self) -> bool {
        self.score.is_valid()
    }

    pub fn prediction(&self, predicted: Score, points: u32) -> Self {
        Self {
            score: predicted,
            points: Some(points),
            ..self.clone()
        }
    }

    /// Applies the result to both teams. Must run exactly once per real
    /// fixture and never for predictions.
    pub fn calc_stats(&self, teams: &mut Teams) {
        let Some((a, b)) = self.score.goals() else {
            return;
        };
        let outcome = self.score.result();
        teams.get_mut(self.team_a).record(a, b, outcome);
        teams.get_mut(self.team_b).record(b, a, outcome.reversed());
    }

    pub fn display_order(&self, other: &Fixture, teams: &Teams) -> Ordering {
        self.group
            .cmp(&other.group)
            .then_with(|| self.when.cmp(&other.when))
            .then_with(|| teams.name(self.team_a).cmp(teams.name(other.team_a)))
    }

    pub fn display<'a>(&'a self, teams: &'a Teams) -> FixtureLine<'a> {
        FixtureLine {
            fixture: self,
            teams,
        }
    }
}

pub struct FixtureLine<'a> {
    fixture: &'a Fixture,
    teams: &'a Teams,
}

impl fmt::Display for FixtureLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fx = self.fixture;
        write!(
            f,
            "Group {}: {} {} {} [{}]",
            fx.group,
            self.teams.name(fx.team_a),
            fx.score,
            self.teams.name(fx.team_b),
            fx.when.format(DATE_FORMAT)
        )?;
        if let Some(points) = fx.points {
            write!(f, "(points={points})")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::cmp::Ordering;

    use chrono::NaiveDate;

    use super::Fixture;
    use crate::score::Score;
    use crate::team::Teams;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2018, 6, d).expect("valid date")
    }

    #[test]
    fn calc_stats_updates_both_teams() {
        let mut teams = Teams::new();
        let a = teams.resolve("A");
        let b = teams.resolve("B");
        let fx = Fixture::new(a, b, date(14), "A", Score::new(2, 1));
        assert!(fx.is_played());
        fx.calc_stats(&mut teams);

        let ta = teams.get(a);
        let tb = teams.get(b);
        assert_eq!((ta.won, ta.goals_for, ta.goals_against), (1, 2, 1));
        assert_eq!((tb.lost, tb.goals_for, tb.goals_against), (1, 1, 2));
        assert_eq!(ta.points(), ta.won * 3 + ta.drawn);
        assert_eq!(tb.points(), 0);
    }

    #[test]
    fn unplayed_fixture_leaves_teams_alone() {
        let mut teams = Teams::new();
        let a = teams.resolve("A");
        let b = teams.resolve("B");
        let fx = Fixture::new(a, b, date(14), "A", Score::Unset);
        assert!(!fx.is_played());
        fx.calc_stats(&mut teams);
        assert_eq!(teams.get(a).played(), 0);
        assert_eq!(teams.get(b).played(), 0);
    }

    #[test]
    fn display_includes_points_for_predictions() {
        let mut teams = Teams::new();
        let a = teams.resolve("Russia");
        let b = teams.resolve("Saudi Arabia");
        let fx = Fixture::new(a, b, date(14), "A", Score::new(5, 0));
        assert_eq!(
            fx.display(&teams).to_string(),
            "Group A: Russia 5:0 Saudi Arabia [14/06/2018]"
        );
        let guess = fx.prediction(Score::new(2, 0), 1);
        assert_eq!(
            guess.display(&teams).to_string(),
            "Group A: Russia 2:0 Saudi Arabia [14/06/2018](points=1)"
        );
    }

    #[test]
    fn display_order_is_group_date_team() {
        let mut teams = Teams::new();
        let a = teams.resolve("A");
        let b = teams.resolve("B");
        let c = teams.resolve("C");
        let first = Fixture::new(b, c, date(14), "A", Score::Unset);
        let second = Fixture::new(a, c, date(15), "A", Score::Unset);
        let third = Fixture::new(a, b, date(1), "B", Score::Unset);
        assert_eq!(first.display_order(&second, &teams), Ordering::Less);
        assert_eq!(second.display_order(&third, &teams), Ordering::Less);
        let same_day = Fixture::new(a, b, date(14), "A", Score::Unset);
        assert_eq!(same_day.display_order(&first, &teams), Ordering::Less);
    }
}
