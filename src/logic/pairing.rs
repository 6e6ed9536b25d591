//! Swiss pairing: bucketed greedy pairing by running score with rematch
//! avoidance, bye fairness, and the random first-round draw.

use crate::logic::scoring::compute_scores;
use crate::models::{GameMatch, PlayerName, RoundRecord, Tournament, TournamentError};
use rand::seq::SliceRandom;
use std::collections::{BTreeMap, HashMap, HashSet};

/// A freshly generated round: the pairings plus at most one bye.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GeneratedRound {
    pub pairings: Vec<(PlayerName, PlayerName)>,
    pub bye: Option<PlayerName>,
}

/// Who has faced whom, over every match with both slots assigned.
/// Symmetric and idempotent.
fn opponents_map(
    records: &BTreeMap<u32, RoundRecord>,
    round_count: u32,
) -> HashMap<PlayerName, HashSet<PlayerName>> {
    let mut opponents: HashMap<PlayerName, HashSet<PlayerName>> = HashMap::new();
    for round in 1..=round_count {
        if let Some(record) = records.get(&round) {
            for m in &record.matches {
                if let Some((a, b)) = m.participants() {
                    opponents.entry(a.clone()).or_default().insert(b.clone());
                    opponents.entry(b.clone()).or_default().insert(a.clone());
                }
            }
        }
    }
    opponents
}

/// Everyone who has already sat out with a bye.
fn players_with_bye(records: &BTreeMap<u32, RoundRecord>, round_count: u32) -> HashSet<PlayerName> {
    let mut had = HashSet::new();
    for round in 1..=round_count {
        if let Some(record) = records.get(&round) {
            if let Some(bye) = &record.bye {
                had.insert(bye.clone());
            }
        }
    }
    had
}

/// Greedily pair `list` in order: each unpaired player takes the first
/// not-yet-used candidate they have not faced, falling back to the first
/// not-yet-used candidate at all (a rematch beats leaving someone out).
/// Returns whoever could not be paired.
fn greedy_pair(
    list: &[PlayerName],
    opponents: &HashMap<PlayerName, HashSet<PlayerName>>,
    pairs: &mut Vec<(PlayerName, PlayerName)>,
) -> Vec<PlayerName> {
    let mut used = vec![false; list.len()];
    for i in 0..list.len() {
        if used[i] {
            continue;
        }
        let faced = opponents.get(&list[i]);
        let mut partner = (i + 1..list.len())
            .find(|&j| !used[j] && faced.map_or(true, |f| !f.contains(&list[j])));
        if partner.is_none() {
            partner = (i + 1..list.len()).find(|&j| !used[j]);
        }
        if let Some(j) = partner {
            used[i] = true;
            used[j] = true;
            pairs.push((list[i].clone(), list[j].clone()));
        }
    }
    list.iter()
        .zip(&used)
        .filter(|(_, &u)| !u)
        .map(|(p, _)| p.clone())
        .collect()
}

/// Generate Swiss pairings for a new round.
///
/// Players are pooled by running score (descending, ties by name). An odd
/// pool hands the bye to the lowest-scoring player who has never had one
/// (falling back to the whole pool when everyone has). The rest are bucketed
/// by exact score and paired greedily from the top bucket down; odd buckets
/// and unpairable players float into the next lower bucket. Floats left
/// after the lowest bucket are paired among themselves; if even that pass
/// leaves someone over, `UnresolvedFloats` is returned rather than dropping
/// a player from the round.
pub fn swiss_pair(
    players: &[PlayerName],
    records: &BTreeMap<u32, RoundRecord>,
    round_count: u32,
) -> Result<GeneratedRound, TournamentError> {
    if players.len() < 2 {
        return Err(TournamentError::InsufficientPlayers {
            available: players.len(),
        });
    }

    let scores = compute_scores(players, records, round_count);
    let opponents = opponents_map(records, round_count);
    let had_bye = players_with_bye(records, round_count);

    let mut pool: Vec<PlayerName> = players.to_vec();
    pool.sort_by(|a, b| scores[b].cmp(&scores[a]).then_with(|| a.cmp(b)));

    let mut bye = None;
    if pool.len() % 2 == 1 {
        let mut candidates: Vec<PlayerName> = pool
            .iter()
            .filter(|p| !had_bye.contains(*p))
            .cloned()
            .collect();
        if candidates.is_empty() {
            candidates = pool.clone();
        }
        candidates.sort_by(|a, b| scores[a].cmp(&scores[b]).then_with(|| a.cmp(b)));
        let pick = candidates.remove(0);
        pool.retain(|p| *p != pick);
        bye = Some(pick);
    }

    let mut buckets: BTreeMap<u32, Vec<PlayerName>> = BTreeMap::new();
    for p in pool {
        buckets.entry(scores[&p]).or_default().push(p);
    }

    let mut pairs = Vec::new();
    let mut floats: Vec<PlayerName> = Vec::new();
    for (_, bucket) in buckets.iter().rev() {
        // this bucket's players first, then anyone floated down from above
        let mut group: Vec<PlayerName> = bucket.clone();
        group.append(&mut floats);
        if group.len() % 2 == 1 {
            if let Some(last) = group.pop() {
                floats.push(last);
            }
        }
        floats.extend(greedy_pair(&group, &opponents, &mut pairs));
    }
    if !floats.is_empty() {
        let unpaired = greedy_pair(&floats, &opponents, &mut pairs);
        if !unpaired.is_empty() {
            // never drop a player from a round silently
            return Err(TournamentError::UnresolvedFloats { players: unpaired });
        }
    }

    Ok(GeneratedRound { pairings: pairs, bye })
}

/// Replace `round`'s sheet entirely with freshly generated Swiss pairings
/// (results reset, bye slot set). Existing matches for that round are
/// overwritten; callers confirm destructive intent.
pub fn generate_swiss_round(tournament: &mut Tournament, round: u32) -> Result<(), TournamentError> {
    tournament.check_round(round)?;
    let generated = swiss_pair(
        &tournament.players,
        &tournament.round_records,
        tournament.rounds,
    )?;
    let record = tournament.round_entry(round);
    record.matches = generated
        .pairings
        .into_iter()
        .map(|(a, b)| GameMatch::with_players(a, b))
        .collect();
    record.bye = generated.bye;
    Ok(())
}

/// Random first-round draw: shuffle the roster, hand the last player the bye
/// when the count is odd, and pair up the rest in order.
pub fn random_first_round(players: &[PlayerName]) -> GeneratedRound {
    let mut shuffled: Vec<PlayerName> = players.to_vec();
    shuffled.shuffle(&mut rand::thread_rng());
    let bye = if shuffled.len() % 2 == 1 {
        shuffled.pop()
    } else {
        None
    };
    let pairings = shuffled
        .chunks_exact(2)
        .map(|pair| (pair[0].clone(), pair[1].clone()))
        .collect();
    GeneratedRound { pairings, bye }
}
