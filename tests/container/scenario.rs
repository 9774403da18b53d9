//! End-to-end bedwars scenarios.

use crate::common::*;

#[test]
fn short_match_compresses_under_1000_bytes() {
    let creator = bedwars_creator();
    let mut sequence = short_match();

    let bytes = creator.build_game_log(&mut sequence, true).unwrap();
    assert!(bytes.len() < 1000, "compressed log is {} bytes", bytes.len());

    let decoded = creator.parse_game_log(&bytes, true).unwrap();
    assert_eq!(decoded.len(), 4);

    let events = decoded.events();
    assert!(events[0].event.is::<BedBreakEvent>());
    assert!(events[1].event.is::<ChatEvent>());
    assert!(events[2].event.is::<DeathEvent>());
    assert!(events[3].event.is::<KillEvent>());
    assert_same_sequence(&sequence, &decoded);
}

#[test]
fn short_match_field_values() {
    let creator = bedwars_creator();
    let bytes = creator.build_game_log(&mut short_match(), false).unwrap();
    let decoded = creator.parse_game_log(&bytes, false).unwrap();

    let kill = decoded.events()[3].event.downcast_ref::<KillEvent>().unwrap();
    assert_eq!(kill.killer, "JvstMatt");
    assert_eq!(kill.killed, "Gargant");
    assert_eq!(kill.weapon, "DIAMOND_SWORD");

    let bed = decoded.events()[0].event.downcast_ref::<BedBreakEvent>().unwrap();
    assert_eq!(bed.destroyer, "SomeRandomPlayer");
    assert_eq!(bed.team, "Red");
}

#[test]
fn repeated_names_pooled_once() {
    let creator = bedwars_creator();
    let bytes = creator.build_game_log(&mut short_match(), false).unwrap();

    // Distinct strings: SomeRandomPlayer, Red, JvstMatt, Hello everyone!,
    // FALL, Gargant, DIAMOND_SWORD
    assert_eq!(&bytes[..4], &7i32.to_be_bytes());
}

#[test]
fn out_of_order_appends_are_sorted() {
    let creator = bedwars_creator();
    let mut sequence = GameLogSequence::new();
    sequence.push_at(300, KillEvent::new("a", "b", "BOW"));
    sequence.push_at(100, ChatEvent::new("a", "first"));
    sequence.push_at(200, DeathEvent::new("b", "VOID"));
    sequence.push_at(100, ChatEvent::new("b", "second"));

    let bytes = creator.build_game_log(&mut sequence, true).unwrap();
    let decoded = creator.parse_game_log(&bytes, true).unwrap();

    let timestamps: Vec<i64> = decoded.iter().map(|e| e.timestamp).collect();
    assert_eq!(timestamps, vec![100, 100, 200, 300]);

    let messages: Vec<&str> = decoded.events()[..2]
        .iter()
        .map(|e| e.event.downcast_ref::<ChatEvent>().unwrap().message.as_str())
        .collect();
    assert_eq!(messages, vec!["first", "second"]);
}

#[test]
fn wall_clock_timestamps() {
    let creator = bedwars_creator();
    let mut sequence = GameLogSequence::new();
    let before = gamelog::now_secs();
    sequence.push(ChatEvent::new("JvstMatt", "gg"));
    sequence.push(DeathEvent::new("JvstMatt", "VOID"));
    let after = gamelog::now_secs();

    let bytes = creator.build_game_log(&mut sequence, true).unwrap();
    let decoded = creator.parse_game_log(&bytes, true).unwrap();
    for event in decoded.iter() {
        assert!(event.timestamp >= before && event.timestamp <= after);
    }
    assert!(decoded.events()[0].event.is::<ChatEvent>());
}

#[test]
fn full_match_compresses_well() {
    let creator = bedwars_creator();
    let players = ["JvstMatt", "Gargant", "SomeRandomPlayer", "Steve"];
    let teams = ["Red", "Blue", "Green", "Yellow"];

    let mut sequence = GameLogSequence::new();
    for i in 0..2_000i64 {
        let p = players[i as usize % 4];
        let q = players[(i as usize + 1) % 4];
        match i % 4 {
            0 => sequence.push_at(i, ChatEvent::new(p, "gg")),
            1 => sequence.push_at(i, KillEvent::new(p, q, "IRON_SWORD")),
            2 => sequence.push_at(i, DeathEvent::new(q, "VOID")),
            _ => sequence.push_at(i, BedBreakEvent::new(p, teams[i as usize % 4])),
        }
    }

    let plain = creator.build_game_log(&mut sequence, false).unwrap();
    let compressed = creator.build_game_log(&mut sequence, true).unwrap();
    assert!(compressed.len() * 2 < plain.len());

    let decoded = creator.parse_game_log(&compressed, true).unwrap();
    assert_same_sequence(&sequence, &decoded);
}
