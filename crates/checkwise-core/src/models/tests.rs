#[cfg(test)]
mod model_tests {
    use jiff::Timestamp;
    use serde_json::json;

    use crate::models::{
        cap_remark, Answer, ChecklistItem, ChecklistSummary, EquipmentInfo, FinishedChecklist,
        ItemCheck, ItemId, OkNotOk, RangeBound, ResultType, SessionOutcome, Verdict, YesNo,
        REMARK_MAX_CHARS,
    };

    fn create_test_items() -> Vec<ChecklistItem> {
        let mut door = ChecklistItem::new(1, "Door seal", ItemCheck::YesNo {
            result: Some(YesNo::No),
        });
        door.remark = "Seal torn".to_string();

        vec![
            door,
            ChecklistItem::new(2, "Earthing", ItemCheck::OkNotOk {
                result: Some(OkNotOk::Ok),
            }),
            ChecklistItem::new(3, "Input voltage", ItemCheck::NumericEntry {
                start_voltage: Some(RangeBound::Number(210.0)),
                end_voltage: Some(RangeBound::Text("240".to_string())),
                result: Some(Verdict::Pass),
                measured: Some(229.5),
            }),
            ChecklistItem::new(4, "Fan rotation", ItemCheck::ok_not_ok()),
        ]
    }

    #[test]
    fn test_item_deserializes_backend_shape() {
        let item: ChecklistItem = serde_json::from_value(json!({
            "id": 7,
            "checkpoint": "Battery voltage",
            "resulttype": "NumericEntry",
            "startVoltage": "12.5",
            "endVoltage": 14,
            "remark": null
        }))
        .expect("valid item");

        assert_eq!(item.id, ItemId::Number(7));
        assert_eq!(item.result_type(), ResultType::NumericEntry);
        assert_eq!(item.remark, "");
        match &item.check {
            ItemCheck::NumericEntry {
                start_voltage,
                end_voltage,
                result,
                ..
            } => {
                assert_eq!(start_voltage.as_ref().and_then(RangeBound::value), Some(12.5));
                assert_eq!(end_voltage.as_ref().and_then(RangeBound::value), Some(14.0));
                assert_eq!(*result, None);
            }
            other => panic!("unexpected check: {other:?}"),
        }
    }

    #[test]
    fn test_item_result_values_on_the_wire() {
        let items = create_test_items();
        let json = serde_json::to_value(&items).expect("serialize");

        assert_eq!(json[0]["resulttype"], "YesNo");
        assert_eq!(json[0]["result"], "No");
        assert_eq!(json[1]["result"], "OK");
        assert_eq!(json[2]["result"], "Pass");
        assert_eq!(json[2]["startVoltage"], 210.0);
        assert_eq!(json[2]["endVoltage"], "240");
        assert!(json[3].get("result").is_none());
        assert!(json[0].get("equipmentUsedSerial").is_none());

        let not_ok: ItemCheck =
            serde_json::from_value(json!({"resulttype": "OkNotOk", "result": "NOT OK"}))
                .expect("valid check");
        assert!(not_ok.is_negative());
    }

    #[test]
    fn test_item_accepts_text_id_and_empty_result() {
        let items: Vec<ChecklistItem> = serde_json::from_value(json!([
            {
                "id": "64f1a2b3c4d5e6f708091011",
                "checkpoint": "Door seal",
                "resulttype": "YesNo",
                "result": ""
            },
            {"id": 2, "checkpoint": "Earthing", "resulttype": "OkNotOk", "result": null},
            {"id": 3, "checkpoint": "Mains", "resulttype": "NumericEntry", "result": " "}
        ]))
        .expect("valid items");

        assert_eq!(items[0].id, ItemId::from("64f1a2b3c4d5e6f708091011"));
        assert!(items.iter().all(|item| !item.check.is_answered()));

        let json = serde_json::to_value(&items).expect("serialize");
        assert_eq!(json[0]["id"], "64f1a2b3c4d5e6f708091011");
        assert_eq!(json[1]["id"], 2);
        assert!(json[0].get("result").is_none());
    }

    #[test]
    fn test_item_rejects_unknown_result_value() {
        let result: Result<ChecklistItem, _> = serde_json::from_value(json!({
            "id": 1,
            "checkpoint": "Door seal",
            "resulttype": "YesNo",
            "result": "Maybe"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_loaded_remark_is_capped() {
        let item: ChecklistItem = serde_json::from_value(json!({
            "id": 1,
            "checkpoint": "Door seal",
            "resulttype": "YesNo",
            "remark": "x".repeat(600)
        }))
        .expect("valid item");
        assert_eq!(item.remark.chars().count(), REMARK_MAX_CHARS);
    }

    #[test]
    fn test_unknown_result_type_is_rejected() {
        let result: Result<ChecklistItem, _> = serde_json::from_value(json!({
            "id": 1,
            "checkpoint": "Mystery",
            "resulttype": "FreeText"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_range_bound_values() {
        assert_eq!(RangeBound::Text(" 3.3 ".to_string()).value(), Some(3.3));
        assert_eq!(RangeBound::Text("".to_string()).value(), None);
        assert_eq!(RangeBound::Text("abc".to_string()).value(), None);
        assert_eq!(RangeBound::Number(f64::NAN).value(), None);
    }

    #[test]
    fn test_answer_parsing() {
        assert_eq!("yes".parse::<Answer>(), Ok(Answer::Yes));
        assert_eq!(" N ".parse::<Answer>(), Ok(Answer::No));
        assert_eq!("OK".parse::<Answer>(), Ok(Answer::Ok));
        assert_eq!("not ok".parse::<Answer>(), Ok(Answer::NotOk));
        assert_eq!("NOTOK".parse::<Answer>(), Ok(Answer::NotOk));
        assert!("maybe".parse::<Answer>().is_err());

        assert_eq!(Answer::Yes.as_yes_no(), Some(YesNo::Yes));
        assert_eq!(Answer::Yes.as_ok_not_ok(), None);
        assert_eq!(Answer::NotOk.as_str(), "NOT OK");
    }

    #[test]
    fn test_negative_results() {
        assert!(YesNo::No.is_negative());
        assert!(!YesNo::Yes.is_negative());
        assert!(OkNotOk::NotOk.is_negative());
        assert!(!OkNotOk::Ok.is_negative());
        assert_eq!(Verdict::Failed.with_icon(), "✗ Failed");
        assert_eq!(Verdict::Pass.with_icon(), "✓ Pass");
    }

    #[test]
    fn test_summary_from_items() {
        let items = create_test_items();
        let summary = ChecklistSummary::from(items.as_slice());

        assert_eq!(
            summary,
            ChecklistSummary {
                total: 4,
                positive: 2,
                negative: 1,
                unanswered: 1,
            }
        );
        assert_eq!(ChecklistSummary::from_items(&[]), ChecklistSummary::default());
    }

    #[test]
    fn test_cap_remark_counts_characters() {
        let remark = "é".repeat(REMARK_MAX_CHARS + 1);
        let capped = cap_remark(&remark);
        assert_eq!(capped.chars().count(), REMARK_MAX_CHARS);
        assert_eq!(cap_remark("short"), "short");
    }

    #[test]
    fn test_finished_checklist_payload() {
        let mut items = create_test_items();
        items[0].equipment_used_serial = Some("MM-100".to_string());
        items[0].calibration_due_date = Some("2026-12-31".to_string());

        let finished = FinishedChecklist {
            items,
            global_remark: "Follow-up needed".to_string(),
            equipment: EquipmentInfo {
                serial: "MM-100".to_string(),
                calibration_due_date: "2026-12-31".to_string(),
            },
            completed_at: Timestamp::from_second(1640995200).unwrap(),
        };

        let json = serde_json::to_value(&finished).expect("serialize");
        assert_eq!(json["globalRemark"], "Follow-up needed");
        assert_eq!(json["items"][0]["equipmentUsedSerial"], "MM-100");
        assert_eq!(json["items"][0]["calibrationDueDate"], "2026-12-31");
        assert_eq!(json["equipment"]["equipmentUsedSerial"], "MM-100");
        assert_eq!(json["completedAt"], "2022-01-01T00:00:00Z");

        let output = finished.to_string();
        assert!(output.contains("- Equipment used: MM-100"));
        assert!(output.contains("4 items: 2 passed, 1 failed, 1 unanswered"));

        assert!(SessionOutcome::Finished(finished).is_finished());
        assert!(!SessionOutcome::Cancelled.is_finished());
    }
}
