use std::sync::Arc;

use pretty_assertions::assert_eq;
use uuid::Uuid;
use worldguard_expansion::config::BooleanConfig;
use worldguard_expansion::{
    BlockVector, BlockVector2, ExpansionConfig, ExpansionError, FlagValue, Location,
    PlaceholderExpansion, PlaceholderPlayer, Region, RegionDomain, RegionStore, Selection,
    StateFlag, WorldGuardExpansion,
};

struct TestPlayer {
    location: Option<Location>,
}

impl TestPlayer {
    fn at(x: f64, y: f64, z: f64) -> Self {
        Self {
            location: Some(Location::new("world", x, y, z)),
        }
    }

    fn offline() -> Self {
        Self { location: None }
    }
}

impl PlaceholderPlayer for TestPlayer {
    fn location(&self) -> Option<Location> {
        self.location.clone()
    }
}

fn cuboid(id: &str, a: (i32, i32, i32), b: (i32, i32, i32)) -> Region {
    Region::new(
        id,
        Selection::cuboid(BlockVector::new(a.0, a.1, a.2), BlockVector::new(b.0, b.1, b.2)),
    )
}

fn expansion(store: RegionStore) -> WorldGuardExpansion<RegionStore> {
    WorldGuardExpansion::new(Arc::new(store), ExpansionConfig::default())
}

fn store() -> RegionStore {
    let store = RegionStore::new();
    store.add_world("world");
    store.add_world("nether");
    store
}

const ALL_KEYS: &[&str] = &[
    "region_name",
    "region_name_capitalized",
    "region_owner",
    "region_owner_groups",
    "region_members",
    "region_members_groups",
    "region_flags",
    "region_has_flag_pvp",
    "region_min_point_x",
    "region_min_point_y",
    "region_min_point_z",
    "region_max_point_x",
    "region_max_point_y",
    "region_max_point_z",
];

#[test]
fn no_region_yields_nothing_for_every_key() {
    let store = store();
    store.add("world", cuboid("elsewhere", (100, 0, 100), (200, 255, 200)));
    let wg = expansion(store);
    let player = TestPlayer::at(0.0, 64.0, 0.0);
    for key in ALL_KEYS {
        assert_eq!(wg.on_request(Some(&player), key), None, "{key}");
        let explicit = format!("{key}:world,0,64,0");
        assert_eq!(wg.on_request(None, &explicit), None, "{explicit}");
    }
}

#[test]
fn name_and_capitalized_name() {
    let store = store();
    store.add("world", cuboid("shop", (0, 0, 0), (10, 100, 10)));
    store.add("world", cuboid("1spawn", (20, 0, 20), (30, 100, 30)));
    let wg = expansion(store);

    let in_shop = TestPlayer::at(5.0, 64.0, 5.0);
    assert_eq!(wg.on_request(Some(&in_shop), "region_name").as_deref(), Some("shop"));
    assert_eq!(
        wg.on_request(Some(&in_shop), "region_name_capitalized").as_deref(),
        Some("Shop")
    );

    let in_spawn = TestPlayer::at(25.0, 64.0, 25.0);
    assert_eq!(
        wg.on_request(Some(&in_spawn), "region_name_capitalized").as_deref(),
        Some("1spawn")
    );
}

#[test]
fn rank_selects_by_priority_then_discovery_order() {
    let store = store();
    store.add("world", cuboid("a", (0, 0, 0), (10, 10, 10)).with_priority(5));
    store.add("world", cuboid("b", (0, 0, 0), (10, 10, 10)).with_priority(3));
    store.add("world", cuboid("c", (0, 0, 0), (10, 10, 10)).with_priority(5));
    let wg = expansion(store);
    let player = TestPlayer::at(5.0, 5.0, 5.0);

    assert_eq!(wg.on_request(Some(&player), "region_name").as_deref(), Some("a"));
    assert_eq!(wg.on_request(Some(&player), "region_name_1").as_deref(), Some("a"));
    assert_eq!(wg.on_request(Some(&player), "region_name_2").as_deref(), Some("c"));
    assert_eq!(wg.on_request(Some(&player), "region_name_3").as_deref(), Some("b"));
    assert_eq!(wg.on_request(Some(&player), "region_name_4"), None);
    assert_eq!(wg.on_request(Some(&player), "region_name_99999999999"), None);
}

#[test]
fn has_flag_checks_name_only() {
    let store = store();
    store.add(
        "world",
        cuboid("arena", (0, 0, 0), (10, 10, 10))
            .with_flag("pvp", FlagValue::State(StateFlag::Deny)),
    );
    store.add("world", cuboid("garden", (20, 0, 20), (30, 10, 30)));
    let wg = expansion(store);

    let in_arena = TestPlayer::at(1.0, 1.0, 1.0);
    assert_eq!(wg.on_request(Some(&in_arena), "region_has_flag_pvp").as_deref(), Some("yes"));
    assert_eq!(wg.on_request(Some(&in_arena), "region_has_flag_PvP").as_deref(), Some("yes"));
    assert_eq!(
        wg.on_request(Some(&in_arena), "region_has_flag_build").as_deref(),
        Some("no")
    );
    assert_eq!(wg.on_request(Some(&in_arena), "region_has_flag_"), None);

    let in_garden = TestPlayer::at(25.0, 1.0, 25.0);
    assert_eq!(wg.on_request(Some(&in_garden), "region_has_flag_pvp").as_deref(), Some("no"));
}

#[test]
fn has_flag_uses_configured_tokens() {
    let store = store();
    store.add(
        "world",
        cuboid("arena", (0, 0, 0), (10, 10, 10)).with_flag("pvp", FlagValue::Boolean(false)),
    );
    let config = ExpansionConfig {
        booleans: BooleanConfig {
            true_token: "&aon".into(),
            false_token: "&coff".into(),
        },
    };
    let wg = WorldGuardExpansion::new(Arc::new(store), config);
    let player = TestPlayer::at(1.0, 1.0, 1.0);
    assert_eq!(wg.on_request(Some(&player), "region_has_flag_pvp").as_deref(), Some("&aon"));
    assert_eq!(wg.on_request(Some(&player), "region_has_flag_tnt").as_deref(), Some("&coff"));
}

#[test]
fn owners_members_and_groups() {
    let store = store();
    let alice = Uuid::new_v4();
    let bob = Uuid::new_v4();
    let ghost = Uuid::new_v4();
    store.set_player_name(alice, "Alice");
    store.set_player_name(bob, "Bob");
    store.add(
        "world",
        cuboid("town", (0, 0, 0), (10, 10, 10))
            .with_owners(RegionDomain::with_players([bob, alice, ghost]).group("mayors"))
            .with_members(RegionDomain::default().group("citizens").group("builders")),
    );
    let wg = expansion(store);
    let player = TestPlayer::at(1.0, 1.0, 1.0);

    assert_eq!(wg.on_request(Some(&player), "region_owner").as_deref(), Some("Alice, Bob"));
    assert_eq!(wg.on_request(Some(&player), "region_owner_groups").as_deref(), Some("*mayors"));
    assert_eq!(wg.on_request(Some(&player), "region_members").as_deref(), Some(""));
    assert_eq!(
        wg.on_request(Some(&player), "region_members_groups").as_deref(),
        Some("*builders, *citizens")
    );
}

#[test]
fn flags_dump() {
    let store = store();
    store.add(
        "world",
        cuboid("spawn", (0, 0, 0), (10, 10, 10))
            .with_flag("pvp", FlagValue::State(StateFlag::Deny))
            .with_flag("greeting", FlagValue::String("Welcome".into()))
            .with_flag("heal-amount", FlagValue::Integer(2)),
    );
    let wg = expansion(store);
    assert_eq!(
        wg.on_request(None, "region_flags:world,5,5,5").as_deref(),
        Some("[greeting=Welcome, heal-amount=2, pvp=DENY]")
    );
}

#[test]
fn explicit_coordinates_ignore_player() {
    let store = store();
    store.add("world", cuboid("spawn", (0, 0, 0), (20, 100, 20)));
    store.add("world", cuboid("mine", (500, 0, 500), (600, 100, 600)));
    let wg = expansion(store);

    assert_eq!(
        wg.on_request(None, "region_name:world,10,64,10").as_deref(),
        Some("spawn")
    );
    let offline = TestPlayer::offline();
    assert_eq!(
        wg.on_request(Some(&offline), "region_name:world,10,64,10").as_deref(),
        Some("spawn")
    );
    let in_mine = TestPlayer::at(550.0, 10.0, 550.0);
    assert_eq!(
        wg.on_request(Some(&in_mine), "region_name:world,10,64,10").as_deref(),
        Some("spawn")
    );
    assert_eq!(wg.on_request(None, "region_name:nether,10,64,10"), None);
    assert_eq!(wg.on_request(None, "region_name:the_end,10,64,10"), None);
}

#[test]
fn malformed_locations_yield_nothing() {
    let store = store();
    store.add("world", cuboid("spawn", (0, 0, 0), (20, 100, 20)));
    let wg = expansion(store);
    for params in [
        "region_name:world",
        "region_name:world,1,2",
        "region_name:world,one,2,3",
        "region_name:",
        "region_name:world,unknown",
    ] {
        assert_eq!(wg.on_request(None, params), None, "{params}");
    }
}

#[test]
fn region_form_uses_center() {
    let store = store();
    store.add("world", cuboid("plot", (0, 0, 0), (10, 10, 10)).with_priority(1));
    store.add("world", cuboid("plot_inner", (4, 4, 4), (6, 6, 6)).with_priority(10));
    store.add("world", cuboid("corner", (0, 0, 0), (1, 1, 1)).with_priority(20));
    let wg = expansion(store);

    assert_eq!(
        wg.on_request(None, "region_name:world,plot").as_deref(),
        Some("plot_inner")
    );
    assert_eq!(
        wg.on_request(None, "region_name_2:world,PLOT").as_deref(),
        Some("plot")
    );
}

#[test]
fn missing_player_yields_empty() {
    let store = store();
    store.add("world", cuboid("spawn", (0, 0, 0), (20, 100, 20)));
    let wg = expansion(store);

    assert_eq!(wg.on_request(None, "region_name").as_deref(), Some(""));
    let offline = TestPlayer::offline();
    assert_eq!(wg.on_request(Some(&offline), "region_name").as_deref(), Some(""));
    assert_eq!(wg.on_request(Some(&offline), "not_a_key").as_deref(), Some(""));
}

#[test]
fn unknown_keys_yield_nothing() {
    let store = store();
    store.add("world", cuboid("spawn", (0, 0, 0), (20, 100, 20)));
    let wg = expansion(store);
    let player = TestPlayer::at(1.0, 1.0, 1.0);
    for key in ["region_id", "region_min_point_w", "", "REGION_NAME"] {
        assert_eq!(wg.on_request(Some(&player), key), None, "{key}");
    }
}

#[test]
fn cuboid_points_are_normalized() {
    let store = store();
    store.add("world", cuboid("box", (10, 80, -5), (-10, 60, 5)));
    let wg = expansion(store);
    let player = TestPlayer::at(0.0, 70.0, 0.0);

    let expected = [
        ("region_min_point_x", "-10"),
        ("region_min_point_y", "60"),
        ("region_min_point_z", "-5"),
        ("region_max_point_x", "10"),
        ("region_max_point_y", "80"),
        ("region_max_point_z", "5"),
    ];
    for (key, value) in expected {
        assert_eq!(wg.on_request(Some(&player), key).as_deref(), Some(value), "{key}");
    }
}

#[test]
fn polygon_points_use_first_vertex_for_x_and_z() {
    let store = store();
    store.add(
        "world",
        Region::new(
            "wedge",
            Selection::polygonal(
                vec![
                    BlockVector2::new(5, 2),
                    BlockVector2::new(-20, 0),
                    BlockVector2::new(0, 30),
                ],
                40,
                10,
            ),
        ),
    );
    let wg = expansion(store);
    let player = TestPlayer::at(-2.0, 20.0, 8.0);

    let expected = [
        ("region_min_point_x", "5"),
        ("region_max_point_x", "5"),
        ("region_min_point_z", "2"),
        ("region_max_point_z", "2"),
        ("region_min_point_y", "10"),
        ("region_max_point_y", "40"),
    ];
    for (key, value) in expected {
        assert_eq!(wg.on_request(Some(&player), key).as_deref(), Some(value), "{key}");
    }
}

#[test]
fn metadata_is_exposed() {
    let wg = expansion(store());
    assert_eq!(wg.name(), "WorldGuard");
    assert_eq!(wg.identifier(), "worldguard");
    assert_eq!(wg.author(), "clip");
    assert_eq!(wg.version(), "1.5.0");
}

#[test]
fn registration_requires_host() {
    let refused = WorldGuardExpansion::<RegionStore>::can_register(None, ExpansionConfig::default());
    assert!(matches!(refused, Err(ExpansionError::HostUnavailable)));

    let host = Arc::new(store());
    assert!(WorldGuardExpansion::can_register(Some(host), ExpansionConfig::default()).is_ok());
}
