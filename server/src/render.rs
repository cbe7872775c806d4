//! Human-readable text for tool responses

use clash_battle::{
    Action, BattleConfig, BattleEvent, BattleOutcome, BattleResult, Effectiveness, Matchup, Side,
    Status, TurnRecord, weaknesses,
};
use clash_protocol::{PokemonData, title_case};

const RULE: &str = "================================================================================";

/// Data card for a single creature
pub fn pokemon_card(data: &PokemonData) -> String {
    let mut lines = vec![
        format!("**{}** (#{:03})", data.display_name(), data.id),
        String::new(),
        format!("**Types:** {}", joined_types(&data.types)),
        String::new(),
    ];

    lines.push("**Base Stats:**".to_string());
    lines.extend(stat_lines(data));
    lines.push(String::new());

    lines.push(format!("**Abilities:** {}", titled_list(&data.abilities)));
    lines.push(format!(
        "**Physical:** {:.1}m tall, {:.1}kg",
        f64::from(data.height) / 10.0,
        f64::from(data.weight) / 10.0
    ));

    if !data.moves.is_empty() {
        lines.push(String::new());
        lines.push("**Notable Moves:**".to_string());
        for mv in data.moves.iter().take(10) {
            let power = mv.power.map(|p| format!(", {p} power")).unwrap_or_default();
            lines.push(format!(
                "   - {} ({}{})",
                title_case(&mv.name),
                title_case(&mv.move_type),
                power
            ));
        }
    }

    lines.join("\n")
}

/// Full battle report: participants, turn log, conclusion and statistics
pub fn battle_report(
    result: &BattleResult,
    sources: [&PokemonData; 2],
    config: &BattleConfig,
    seed: u64,
) -> String {
    let mut lines = vec![
        RULE.to_string(),
        "**BATTLE ARENA**".to_string(),
        RULE.to_string(),
        String::new(),
        "### Battle Participants".to_string(),
        String::new(),
    ];

    for (side, data) in Side::BOTH.into_iter().zip(sources) {
        lines.push(format!("**[{}] {}** (#{:03})", side, data.display_name(), data.id));
        lines.push(format!("   **Type:** {}", joined_types(&data.types)));
        lines.extend(stat_lines(data).into_iter().map(|line| format!("  {line}")));

        let moves = result.combatant(side).moves();
        if !moves.is_empty() {
            lines.push("   **Available Moves:**".to_string());
            for mv in moves {
                let power = if mv.is_damaging() {
                    format!("{} power", mv.power)
                } else {
                    "Status".to_string()
                };
                lines.push(format!(
                    "     - {} - {} ({})",
                    title_case(&mv.name),
                    mv.move_type,
                    power
                ));
            }
        }
        lines.push(String::new());
    }

    lines.push("### Battle Conditions".to_string());
    lines.push(format!("**Battle Level:** {}", config.level));
    lines.push(format!("**Max Turns:** {}", config.max_turns));
    lines.push(format!("**Seed:** {seed}"));
    lines.push(speed_line(result));
    lines.push(String::new());

    lines.push(RULE.to_string());
    lines.push("**BATTLE BEGINS!**".to_string());
    lines.push(RULE.to_string());

    let mut current_turn = 0;
    for record in &result.log {
        if record.turn != current_turn {
            current_turn = record.turn;
            lines.push(String::new());
            lines.push(format!("### Turn {current_turn}"));
            lines.push("-".repeat(40));
        }
        lines.extend(turn_lines(result, record));
    }

    lines.push(String::new());
    lines.extend(conclusion_lines(result));
    lines.push(String::new());
    lines.extend(statistics_lines(result));
    lines.push(RULE.to_string());

    lines.join("\n")
}

/// Analysis of one attacking type against one or two defending types
pub fn matchup_report(matchup: &Matchup) -> String {
    let defending = matchup
        .defending
        .iter()
        .map(|t| t.as_str())
        .collect::<Vec<_>>()
        .join(" + ");

    let result = match matchup.effectiveness {
        Effectiveness::SuperEffective if matchup.multiplier >= 4.0 => "Extremely effective!",
        Effectiveness::SuperEffective => "Super effective!",
        Effectiveness::Normal => "Normal damage",
        Effectiveness::NotVeryEffective => "Not very effective",
        Effectiveness::NoEffect => "No effect!",
    };

    let strategy = match matchup.effectiveness {
        Effectiveness::SuperEffective => {
            "This is an excellent offensive choice! Use this type advantage!"
        }
        Effectiveness::NotVeryEffective => {
            "This is a poor offensive choice. Consider a different move type."
        }
        Effectiveness::NoEffect => {
            "This move will have absolutely no effect. Choose a different attack!"
        }
        Effectiveness::Normal => "Standard damage - no particular advantage or disadvantage.",
    };

    let mut lines = vec![
        "**TYPE EFFECTIVENESS ANALYSIS**".to_string(),
        String::new(),
        format!("**{}** -> **{}**", matchup.attacking, defending),
        String::new(),
        format!("**Effectiveness:** {}x ({})", matchup.multiplier, matchup.label()),
        format!("**Result:** {result}"),
        format!("**Damage:** {}% of normal", matchup.percent_of_normal()),
        String::new(),
        format!("**Strategy:** {strategy}"),
    ];

    let weak_to = weaknesses(&matchup.defending);
    if !weak_to.is_empty() {
        let names = weak_to.iter().map(|t| t.as_str()).collect::<Vec<_>>().join(", ");
        lines.push(format!("**Defender is weak to:** {names}"));
    }

    lines.join("\n")
}

fn stat_lines(data: &PokemonData) -> Vec<String> {
    let stats = &data.stats;
    vec![
        format!("   HP: {}", stats.hp),
        format!("   Attack: {}", stats.attack),
        format!("   Defense: {}", stats.defense),
        format!("   Sp. Attack: {}", stats.special_attack),
        format!("   Sp. Defense: {}", stats.special_defense),
        format!("   Speed: {}", stats.speed),
        format!("   **Total: {}**", stats.total()),
    ]
}

fn joined_types(types: &[String]) -> String {
    types.iter().map(|t| title_case(t)).collect::<Vec<_>>().join(" / ")
}

fn titled_list(items: &[String]) -> String {
    items.iter().map(|s| title_case(s)).collect::<Vec<_>>().join(", ")
}

fn name(result: &BattleResult, side: Side) -> String {
    result.combatant(side).record.display_name()
}

fn speed_line(result: &BattleResult) -> String {
    let speed = |side: Side| result.combatant(side).stats().speed;
    let (p1, p2) = (speed(Side::P1), speed(Side::P2));

    match p1.cmp(&p2) {
        std::cmp::Ordering::Greater => {
            format!("**Speed Advantage:** {} ({p1}) goes first!", name(result, Side::P1))
        }
        std::cmp::Ordering::Less => {
            format!("**Speed Advantage:** {} ({p2}) goes first!", name(result, Side::P2))
        }
        std::cmp::Ordering::Equal => format!("**Speed Tie:** both have equal speed ({p1})!"),
    }
}

fn turn_lines(result: &BattleResult, record: &TurnRecord) -> Vec<String> {
    let actor = name(result, record.actor);
    let target = name(result, record.target);
    let mut lines = Vec::new();

    match &record.action {
        Action::Move(move_name) => {
            let move_name = title_case(move_name);
            if !record.hit {
                lines.push(format!("   {actor} used {move_name} but it missed!"));
            } else {
                lines.push(format!("   **{actor} used {move_name}!**"));
                match record.effectiveness {
                    Some(Effectiveness::SuperEffective) => {
                        lines.push("   **It's super effective!**".to_string())
                    }
                    Some(Effectiveness::NotVeryEffective) => {
                        lines.push("   **It's not very effective...**".to_string())
                    }
                    Some(Effectiveness::NoEffect) => {
                        lines.push(format!("   **It doesn't affect {target}...**"))
                    }
                    _ => {}
                }
                if record.damage > 0 {
                    let max_hp = result.combatant(record.target).max_hp;
                    lines.push(format!(
                        "   {target} took **{} damage**! ({}/{} HP)",
                        record.damage, record.target_hp, max_hp
                    ));
                }
            }
        }
        Action::Struggle => lines.push(format!("   {actor} has no usable moves!")),
        Action::CouldNotMove(lockout) => {
            lines.push(format!("   {actor} is {} and cannot move!", lockout.as_str()))
        }
        Action::EndOfTurn => {}
    }

    lines.extend(
        record
            .events
            .iter()
            .map(|event| format!("   {}", event_line(result, event))),
    );
    lines
}

fn event_line(result: &BattleResult, event: &BattleEvent) -> String {
    match *event {
        BattleEvent::Inflicted { side, status } => {
            let verb = match status {
                Status::Burn => "was burned!",
                Status::Freeze => "was frozen solid!",
                Status::Paralysis => "is paralyzed! It may be unable to move!",
                Status::Poison => "was poisoned!",
                Status::Sleep => "fell asleep!",
            };
            format!("{} {verb}", name(result, side))
        }
        BattleEvent::Residual {
            side,
            status,
            damage,
        } => {
            let cause = match status {
                Status::Poison => "poison",
                _ => "its burn",
            };
            format!("{} is hurt by {cause}! (-{damage} HP)", name(result, side))
        }
        BattleEvent::WokeUp { side } => format!("{} woke up!", name(result, side)),
        BattleEvent::Thawed { side } => format!("{} thawed out!", name(result, side)),
        BattleEvent::Cured { side, status } => {
            format!("{} is no longer affected by {}.", name(result, side), status.as_str())
        }
        BattleEvent::Fainted { side } => format!("**{} has fainted!**", name(result, side)),
    }
}

fn conclusion_lines(result: &BattleResult) -> Vec<String> {
    let mut lines = vec![
        RULE.to_string(),
        "**BATTLE CONCLUSION**".to_string(),
        RULE.to_string(),
    ];

    match result.outcome {
        BattleOutcome::Knockout { winner } | BattleOutcome::Decision { winner } => {
            let survivor = result.combatant(winner);
            let decided = matches!(result.outcome, BattleOutcome::Decision { .. });

            lines.push(format!(
                "**WINNER: {}!**{}",
                name(result, winner),
                if decided { " (decision on remaining HP)" } else { "" }
            ));
            lines.push(format!(
                "**Final Status:** {} wins with {}/{} HP ({}%)",
                name(result, winner),
                survivor.hp(),
                survivor.max_hp,
                survivor.hp_percent()
            ));
            lines.push(format!("**Defeated:** {}", name(result, winner.opponent())));
        }
        BattleOutcome::NoContest => {
            lines.push("**RESULT: Draw (turn limit reached)**".to_string());
        }
    }

    lines.push(format!("**Battle Duration:** {} turns", result.turns));
    lines.push(String::new());

    lines.push("**Final HP:**".to_string());
    for side in Side::BOTH {
        let combatant = result.combatant(side);
        let status = combatant
            .status()
            .map(|s| format!(" ({})", s.as_str()))
            .unwrap_or_default();
        lines.push(format!(
            "   - {}: {}/{} HP{}",
            name(result, side),
            combatant.hp(),
            combatant.max_hp,
            status
        ));
    }

    lines
}

fn statistics_lines(result: &BattleResult) -> Vec<String> {
    let stats = |side: Side| result.combatant(side).stats();
    let pick = |p1_wins: bool| name(result, if p1_wins { Side::P1 } else { Side::P2 });

    let mut lines = vec![
        "### Battle Statistics".to_string(),
        format!("**Total Turns:** {}", result.turns),
        format!("**Faster:** {}", pick(stats(Side::P1).speed >= stats(Side::P2).speed)),
        format!("**Higher Attack:** {}", pick(stats(Side::P1).attack >= stats(Side::P2).attack)),
        format!(
            "**Higher Defense:** {}",
            pick(stats(Side::P1).defense >= stats(Side::P2).defense)
        ),
    ];
    for side in Side::BOTH {
        lines.push(format!(
            "**Damage dealt by {}:** {}",
            name(result, side),
            result.damage_dealt(side)
        ));
    }

    lines.push(String::new());
    lines.push("### Strategic Analysis".to_string());

    if let Some(winner) = result.winner() {
        let loser = winner.opponent();
        let (w, l) = (stats(winner), stats(loser));
        let (winner_name, loser_name) = (name(result, winner), name(result, loser));

        if w.speed > l.speed {
            lines.push(format!(
                "**Speed Advantage:** {winner_name}'s superior speed ({} vs {}) let it strike first.",
                w.speed, l.speed
            ));
        }
        if w.attack > l.defense || w.special_attack > l.special_defense {
            lines.push(format!(
                "**Offensive Power:** {winner_name}'s attacks overwhelmed {loser_name}'s defenses."
            ));
        }
        lines.push(format!(
            "**Key Factor:** type matchups and move selection decided {winner_name}'s victory."
        ));
    } else {
        lines.push("Neither side could finish the other before the turn limit.".to_string());
    }

    lines
}
