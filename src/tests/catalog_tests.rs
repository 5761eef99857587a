mod tests {
    use crate::{
        catalog::{
            format::format_market_value, id::parse_leading_int, latency::LatencyPolicy,
            operation::CatalogOperation, CatalogService,
        },
        constants::{PLACEHOLDER_IMAGE, UNKNOWN_TEAM_LABEL},
        errors::{AppError, CatalogError, EntityKind},
        shapes::{
            dataset::Dataset,
            draft::PlayerDraft,
            enums::{FootEnum, MarketValueTier, PositionEnum},
            player::PlayerStatsEntry,
        },
        tests::fixtures::{make_player, sample_dataset, sample_draft, sample_service},
    };
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;
    use std::time::Duration;

    fn ids(players: &[crate::shapes::player::PlayerEntry]) -> Vec<u32> {
        players.iter().map(|p| p.id).collect()
    }

    #[tokio::test]
    async fn list_players_keeps_insertion_order() {
        let service = sample_service();
        let players = service.list_players().await.expect("expected players");
        assert_eq!(ids(&players), vec![3, 7, 5, 11, 2]);
    }

    #[tokio::test]
    async fn get_player_returns_every_stored_record() {
        let service = sample_service();
        for player in sample_dataset().players {
            let found = service.get_player(player.id).await.expect("expected a player");
            assert_eq!(found, player);
        }
    }

    #[tokio::test]
    async fn get_player_unknown_id_is_not_found() {
        let service = sample_service();
        let err = service.get_player(999u32).await.expect_err("expected an error");
        assert!(err.is_not_found());
        match err {
            AppError::Catalog(CatalogError::NotFound {
                operation,
                entity,
                id,
            }) => {
                assert_eq!(operation, CatalogOperation::GetPlayer);
                assert_eq!(entity, EntityKind::Player);
                assert_eq!(id, "999");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn get_player_error_message_names_the_operation() {
        let service = sample_service();
        let err = service.get_player(42u32).await.expect_err("expected an error");
        assert_eq!(err.to_string(), "error fetching player: player not found (42)");
    }

    #[tokio::test]
    async fn get_player_coerces_text_ids() {
        let service = sample_service();
        assert_eq!(service.get_player("7").await.expect("expected a player").id, 7);
        assert_eq!(service.get_player(" 11abc").await.expect("expected a player").id, 11);
        assert!(service
            .get_player("messi")
            .await
            .expect_err("expected an error")
            .is_not_found());
        assert!(service
            .get_player(-3i64)
            .await
            .expect_err("expected an error")
            .is_not_found());
    }

    #[tokio::test]
    async fn teams_are_listed_and_looked_up() {
        let service = sample_service();
        let teams = service.list_teams().await.expect("expected teams");
        assert_eq!(teams.len(), 3);
        assert_eq!(teams[0].name, "Inter Miami");
        let team = service.get_team_by_id("2").await.expect("expected a team");
        assert_eq!(team.name, "Manchester City");
        let err = service.get_team_by_id(40u32).await.expect_err("expected an error");
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "error fetching team: team not found (40)");
    }

    #[test]
    fn get_team_is_synchronous_and_tolerant() {
        let service = sample_service();
        assert_eq!(service.get_team(1).map(|t| t.name.as_str()), Some("Inter Miami"));
        assert!(service.get_team(99).is_none());
        assert_eq!(service.team_label(Some(2)), "Manchester City");
        assert_eq!(service.team_label(Some(99)), UNKNOWN_TEAM_LABEL);
        assert_eq!(service.team_label(None), UNKNOWN_TEAM_LABEL);
    }

    #[tokio::test]
    async fn players_by_team_only_returns_that_team() {
        let service = sample_service();
        let players = service
            .list_players_by_team(1u32)
            .await
            .expect("expected players");
        assert_eq!(ids(&players), vec![3, 5]);
        assert!(players.iter().all(|p| p.team_id == Some(1)));
    }

    #[tokio::test]
    async fn players_by_team_without_players_is_empty() {
        let service = sample_service();
        assert!(service
            .list_players_by_team(3u32)
            .await
            .expect("expected an empty list")
            .is_empty());
        assert!(service
            .list_players_by_team(404u32)
            .await
            .expect("expected an empty list")
            .is_empty());
        assert!(service
            .list_players_by_team("none")
            .await
            .expect("expected an empty list")
            .is_empty());
    }

    // an empty query is not special-cased
    #[tokio::test]
    async fn empty_search_matches_every_player() {
        let service = sample_service();
        let all = service.list_players().await.expect("expected players");
        let found = service.search_players("").await.expect("expected players");
        assert_eq!(found, all);
    }

    #[tokio::test]
    async fn search_ignores_case() {
        let service = sample_service();
        let lower = service.search_players("messi").await.expect("expected players");
        let upper = service.search_players("MESSI").await.expect("expected players");
        assert_eq!(ids(&lower), vec![3]);
        assert_eq!(lower, upper);
    }

    #[tokio::test]
    async fn search_matches_position_and_nationality() {
        let service = sample_service();
        let forwards = service
            .search_players("centre-forward")
            .await
            .expect("expected players");
        assert_eq!(ids(&forwards), vec![7, 5]);
        let spanish = service.search_players("spain").await.expect("expected players");
        assert_eq!(ids(&spanish), vec![11, 2]);
        let nobody = service.search_players("zzz").await.expect("expected players");
        assert!(nobody.is_empty());
    }

    #[tokio::test]
    async fn add_player_assigns_increasing_ids() {
        let mut service = sample_service();
        assert_eq!(service.next_player_id(), 12);
        let mut previous = 11;
        for _ in 0..5 {
            let player = service
                .add_player(&sample_draft())
                .await
                .expect("expected a player");
            assert!(player.id > previous);
            previous = player.id;
        }
        assert_eq!(previous, 16);
        assert_eq!(service.next_player_id(), 17);
        assert_eq!(service.list_players().await.expect("expected players").len(), 10);
    }

    #[tokio::test]
    async fn add_player_copies_the_coerced_draft() {
        let mut service = sample_service();
        let player = service
            .add_player(&sample_draft())
            .await
            .expect("expected a player");
        assert_eq!(player.id, 12);
        assert_eq!(player.name, "Pedri");
        assert_eq!(player.age, 22);
        assert_eq!(player.position, PositionEnum::CentralMidfield);
        assert_eq!(player.nationality, "Spain");
        assert_eq!(player.team_id, Some(2));
        assert_eq!(player.market_value, 80_000_000);
        assert_eq!(player.contract_until, NaiveDate::from_ymd_opt(2030, 6, 30));
        assert_eq!(player.shirt_number, Some(8));
        assert_eq!(player.height, Some(174));
        assert_eq!(player.weight, Some(60));
        assert_eq!(player.foot, FootEnum::Right);
        assert_eq!(player.stats, PlayerStatsEntry::default());
        assert_eq!(player.image.as_deref(), Some(PLACEHOLDER_IMAGE));
        assert!(player.date_added.is_some());
        let stored = service.get_player(12u32).await.expect("expected a player");
        assert_eq!(stored, player);
    }

    #[tokio::test]
    async fn add_player_defaults_missing_optional_fields() {
        let mut service = sample_service();
        let draft = PlayerDraft {
            contract_until: String::new(),
            shirt_number: String::new(),
            height: "0".to_string(),
            weight: String::new(),
            foot: String::new(),
            team_id: String::new(),
            ..sample_draft()
        };
        let player = service.add_player(&draft).await.expect("expected a player");
        assert_eq!(player.contract_until, None);
        assert_eq!(player.shirt_number, None);
        assert_eq!(player.height, None);
        assert_eq!(player.weight, None);
        assert_eq!(player.foot, FootEnum::Right);
        assert_eq!(player.team_id, None);
    }

    #[tokio::test]
    async fn add_player_does_not_enforce_business_rules() {
        let mut service = sample_service();
        // shirt 9 is already worn at team 2 and age 12 is outside the form range
        let draft = PlayerDraft {
            shirt_number: "9".to_string(),
            age: "12".to_string(),
            ..sample_draft()
        };
        let player = service.add_player(&draft).await.expect("expected a player");
        assert_eq!(player.shirt_number, Some(9));
        assert_eq!(player.age, 12);
    }

    #[tokio::test]
    async fn add_player_rejects_uncoercible_drafts() {
        let mut service = sample_service();
        let draft = PlayerDraft {
            age: "old".to_string(),
            ..sample_draft()
        };
        let err = service.add_player(&draft).await.expect_err("expected an error");
        assert!(!err.is_not_found());
        assert_eq!(err.to_string(), "error adding player: invalid age 'old'");
        // nothing was appended and the counter did not move
        assert_eq!(service.next_player_id(), 12);
        assert_eq!(service.list_players().await.expect("expected players").len(), 5);
    }

    #[tokio::test]
    async fn add_player_rejects_unknown_positions() {
        let mut service = sample_service();
        let draft = PlayerDraft {
            position: "Libero".to_string(),
            ..sample_draft()
        };
        let err = service.add_player(&draft).await.expect_err("expected an error");
        assert!(matches!(
            err,
            AppError::Catalog(CatalogError::Failed {
                operation: CatalogOperation::AddPlayer,
                ..
            })
        ));
    }

    #[tokio::test]
    async fn shirt_number_taken_in_team_is_unavailable() {
        let service = sample_service();
        assert!(!service
            .validate_shirt_number(1u32, 10u32, None)
            .await
            .expect("expected a flag"));
        assert!(!service
            .validate_shirt_number("2", "9", None)
            .await
            .expect("expected a flag"));
    }

    #[tokio::test]
    async fn shirt_number_free_in_team_is_available() {
        let service = sample_service();
        assert!(service
            .validate_shirt_number(1u32, 7u32, None)
            .await
            .expect("expected a flag"));
        // 16 is worn at team 2, not team 1
        assert!(service
            .validate_shirt_number(1u32, 16u32, None)
            .await
            .expect("expected a flag"));
        assert!(service
            .validate_shirt_number(3u32, 10u32, None)
            .await
            .expect("expected a flag"));
    }

    #[tokio::test]
    async fn excluded_player_does_not_collide() {
        let service = sample_service();
        assert!(service
            .validate_shirt_number(1u32, 10u32, Some(3))
            .await
            .expect("expected a flag"));
        assert!(!service
            .validate_shirt_number(1u32, 10u32, Some(5))
            .await
            .expect("expected a flag"));
    }

    #[tokio::test]
    async fn shirt_number_check_sees_added_players() {
        let mut service = sample_service();
        assert!(service
            .validate_shirt_number(2u32, 8u32, None)
            .await
            .expect("expected a flag"));
        service
            .add_player(&sample_draft())
            .await
            .expect("expected a player");
        assert!(!service
            .validate_shirt_number(2u32, 8u32, None)
            .await
            .expect("expected a flag"));
    }

    #[test]
    fn market_values_are_formatted() {
        assert_eq!(format_market_value(50_000_000), "€50.0M");
        assert_eq!(format_market_value(750_000), "€750K");
        assert_eq!(format_market_value(1_000_000), "€1.0M");
        assert_eq!(format_market_value(1_250_000), "€1.3M");
        // halves round up on the exact decimal value
        assert_eq!(format_market_value(1_150_000), "€1.2M");
        assert_eq!(format_market_value(1_049_999), "€1.0M");
        assert_eq!(format_market_value(180_000_000), "€180.0M");
        assert_eq!(format_market_value(999_999), "€1000K");
        assert_eq!(format_market_value(0), "€0K");
        assert_eq!(sample_service().format_market_value(3_000_000), "€3.0M");
    }

    #[test]
    fn market_value_tiers() {
        assert_eq!(MarketValueTier::of(180_000_000), MarketValueTier::High);
        assert_eq!(MarketValueTier::of(100_000_000), MarketValueTier::High);
        assert_eq!(MarketValueTier::of(50_000_000), MarketValueTier::Medium);
        assert_eq!(MarketValueTier::of(49_999_999), MarketValueTier::Standard);
    }

    #[test]
    fn stats_average_ages_and_sum_values() {
        let dataset = Dataset {
            teams: vec![],
            players: vec![
                make_player(1, "A", 20, PositionEnum::Goalkeeper, "Spain", None, 1_000, None),
                make_player(2, "B", 30, PositionEnum::LeftBack, "Chile", None, 2_500, None),
            ],
        };
        let service = CatalogService::new(dataset, LatencyPolicy::Disabled);
        let stats = service.player_stats();
        assert_eq!(stats.total_players, 2);
        assert_eq!(stats.average_age, 25);
        assert_eq!(stats.total_market_value, 3_500);
        assert_eq!(stats.last_added_player.map(|p| p.id), Some(2));
    }

    #[tokio::test]
    async fn total_market_value_saturates_instead_of_overflowing() {
        let mut service = CatalogService::new(Dataset::default(), LatencyPolicy::Disabled);
        let draft = PlayerDraft {
            market_value: i64::MAX.to_string(),
            ..sample_draft()
        };
        assert!(draft.validate().is_empty());
        for _ in 0..3 {
            service.add_player(&draft).await.expect("expected a player");
        }
        let stats = service.player_stats();
        assert_eq!(stats.total_players, 3);
        assert_eq!(stats.total_market_value, u64::MAX);
    }

    #[test]
    fn stats_round_the_average_age() {
        let service = sample_service();
        // (37 + 24 + 37 + 28 + 30) / 5 = 31.2
        assert_eq!(service.player_stats().average_age, 31);
    }

    #[test]
    fn empty_catalog_starts_ids_at_one() {
        let service = CatalogService::new(Dataset::default(), LatencyPolicy::Disabled);
        assert_eq!(service.next_player_id(), 1);
        let stats = service.player_stats();
        assert_eq!(stats.total_players, 0);
        assert_eq!(stats.average_age, 0);
        assert_eq!(stats.last_added_player, None);
    }

    #[tokio::test]
    async fn last_added_player_follows_inserts() {
        let mut service = sample_service();
        let player = service
            .add_player(&sample_draft())
            .await
            .expect("expected a player");
        assert_eq!(service.player_stats().last_added_player, Some(player));
    }

    #[test]
    fn latency_policies() {
        assert_eq!(
            LatencyPolicy::Simulated.delay_for(CatalogOperation::AddPlayer),
            Duration::from_millis(800)
        );
        assert_eq!(
            LatencyPolicy::Simulated.delay_for(CatalogOperation::GetTeam),
            Duration::from_millis(200)
        );
        assert_eq!(
            LatencyPolicy::Fixed(Duration::from_millis(5)).delay_for(CatalogOperation::ListPlayers),
            Duration::from_millis(5)
        );
        assert_eq!(
            LatencyPolicy::Disabled.delay_for(CatalogOperation::ListPlayers),
            Duration::ZERO
        );
        assert_eq!(LatencyPolicy::default(), LatencyPolicy::Simulated);
    }

    #[tokio::test]
    async fn fixed_latency_still_answers() {
        let service = CatalogService::new(
            sample_dataset(),
            LatencyPolicy::Fixed(Duration::from_millis(1)),
        );
        assert_eq!(service.list_players().await.expect("expected players").len(), 5);
    }

    #[test]
    fn leading_integers_are_parsed() {
        assert_eq!(parse_leading_int("42"), Some(42));
        assert_eq!(parse_leading_int("  7"), Some(7));
        assert_eq!(parse_leading_int("12abc"), Some(12));
        assert_eq!(parse_leading_int("7.9"), Some(7));
        assert_eq!(parse_leading_int("-3"), Some(-3));
        assert_eq!(parse_leading_int("+5"), Some(5));
        assert_eq!(parse_leading_int("abc"), None);
        assert_eq!(parse_leading_int(""), None);
        assert_eq!(parse_leading_int("-"), None);
    }
}
