//! Broadcast evaluation, failure classification and unit handling through a
//! scripted engine.

mod common;

use common::StubEngine;
use tp_app::{CellValue, Evaluated, PropsError, Session};
use tp_core::{Tolerances, nearly_equal};

fn approx(a: f64, b: f64) -> bool {
    nearly_equal(a, b, Tolerances::default())
}

#[test]
fn row_against_scalar_gives_row() {
    let engine = StubEngine::with(|call| call.inputs[0].1 * 2.0);
    let session = Session::new(&engine);

    let out = session
        .props_si(
            "D",
            "T",
            &CellValue::row([300.0, 310.0, 320.0, 330.0]),
            "P",
            &CellValue::Number(101_325.0),
            "Water",
        )
        .unwrap();

    assert_eq!(out, Evaluated::Row(vec![600.0, 620.0, 640.0, 660.0]));
    assert_eq!(engine.call_count(), 4);
    assert!(engine.log().iter().all(|c| c.inputs[1].1 == 101_325.0));
}

#[test]
fn mismatched_lengths_make_no_calls() {
    let engine = StubEngine::returning(1.0);
    let session = Session::new(&engine);

    let err = session
        .props_si(
            "H",
            "T",
            &CellValue::column([300.0, 310.0, 320.0, 330.0]),
            "P",
            &CellValue::column([1e5, 2e5, 3e5]),
            "Water",
        )
        .unwrap_err();

    assert_eq!(
        err,
        PropsError::ShapeMismatch {
            lengths: vec![("value1", 4), ("value2", 3)]
        }
    );
    assert_eq!(engine.call_count(), 0);
}

#[test]
fn sentinels_surface_engine_text() {
    let huge: f64 = "1.0e309".parse().unwrap();
    for sentinel in [f64::NAN, huge] {
        let engine =
            StubEngine::returning(sentinel).errstring("Temperature to QT_flash out of range");
        let session = Session::new(&engine);
        let err = session
            .props_si(
                "H",
                "T",
                &CellValue::Number(-5.0),
                "Q",
                &CellValue::Number(0.0),
                "Water",
            )
            .unwrap_err();

        let PropsError::ComputationFailure { index, message } = &err else {
            panic!("expected ComputationFailure, got {err:?}");
        };
        assert_eq!(*index, None);
        assert_eq!(message, "Temperature to QT_flash out of range");
        assert!(!err.to_string().contains("inf"));
        assert!(!err.to_string().contains("NaN"));
    }
}

#[test]
fn failure_in_batch_reports_index_and_stops() {
    let engine = StubEngine::with(|call| {
        if call.inputs[0].1 > 400.0 {
            f64::NAN
        } else {
            1.0
        }
    })
    .errstring("out of range");
    let session = Session::new(&engine);

    let err = session
        .props_si(
            "S",
            "T",
            &CellValue::column([300.0, 500.0, 350.0]),
            "P",
            &CellValue::Number(1e5),
            "Water",
        )
        .unwrap_err();

    assert_eq!(
        err.to_string(),
        "Error at index 1: CoolProp failed to compute property. out of range"
    );
    assert_eq!(engine.call_count(), 2);
}

#[test]
fn critical_temperature_in_celsius() {
    let engine = StubEngine::returning(647.096);
    let session = Session::new(&engine);

    let tc = session.props1("TCRIT", "water").unwrap();

    assert!(approx(tc, 373.946));
    let call = &engine.log()[0];
    assert_eq!(call.output, "Tcrit");
    assert_eq!(call.fluid.as_deref(), Some("Water"));
    assert!(approx(session.props1_si("Tcrit", "Water").unwrap(), 647.096));
}

#[test]
fn engineering_inputs_convert_per_name() {
    let engine = StubEngine::returning(2_675_500.0);
    let session = Session::new(&engine);

    let h = session
        .props(
            "enthalpy",
            "temperature",
            &CellValue::Number(100.0),
            "pressure",
            &CellValue::Number(1.01325),
            "R-134a",
        )
        .unwrap();

    assert!(approx(h.values()[0], 2675.5));
    let call = &engine.log()[0];
    assert_eq!(call.output, "H");
    assert_eq!(call.inputs[0].0, "T");
    assert!(approx(call.inputs[0].1, 373.15));
    assert_eq!(call.inputs[1].0, "P");
    assert!(approx(call.inputs[1].1, 101_325.0));
    assert_eq!(call.fluid.as_deref(), Some("R134a"));

    let again = session
        .tmpr(
            "H",
            "T",
            &CellValue::Number(100.0),
            "P",
            &CellValue::Number(1.01325),
            "R134a",
        )
        .unwrap();
    assert_eq!(again, h);
}

#[test]
fn humid_air_three_way_broadcast() {
    let engine = StubEngine::with(|call| call.inputs[0].1);
    let session = Session::new(&engine);

    let out = session
        .ha_props(
            "Tdb",
            "Tdb",
            &CellValue::row([20.0, 25.0, 30.0]),
            "RH",
            &CellValue::Number(0.5),
            "P",
            &CellValue::Number(1.01325),
        )
        .unwrap();

    let Evaluated::Row(values) = &out else {
        panic!("expected row, got {out:?}");
    };
    assert!(values.iter().zip([20.0, 25.0, 30.0]).all(|(a, b)| approx(*a, b)));
    let call = &engine.log()[2];
    assert_eq!(call.output, "T");
    assert_eq!(call.inputs[1], ("R".to_string(), 0.5));
    assert!(approx(call.inputs[2].1, 101_325.0));

    let si = session
        .tmpa(
            "W",
            "T",
            &CellValue::Number(293.15),
            "R",
            &CellValue::Number(0.5),
            "P",
            &CellValue::Number(101_325.0),
        )
        .unwrap();
    assert_eq!(si.values().len(), 1);
}

#[test]
fn humid_air_lengths_must_match_exactly() {
    let engine = StubEngine::returning(0.01);
    let session = Session::new(&engine);

    let err = session
        .ha_props_si(
            "W",
            "T",
            &CellValue::column([290.0, 295.0, 300.0]),
            "R",
            &CellValue::column([0.5]),
            "P",
            &CellValue::Number(101_325.0),
        )
        .unwrap_err();

    assert!(matches!(err, PropsError::ShapeMismatch { .. }));
    assert_eq!(engine.call_count(), 0);
}

#[test]
fn validation_order_and_messages() {
    let engine = StubEngine::returning(1.0);
    let session = Session::new(&engine);
    let one = CellValue::Number(1.0);

    let err = session.props_si(" ", "", &CellValue::Empty, "", &one, "").unwrap_err();
    assert_eq!(err.to_string(), "Output parameter is missing.");

    let err = session.props_si("H", "T", &one, "\t", &one, "").unwrap_err();
    assert_eq!(err.to_string(), "Second property name is missing.");

    let err = session.props_si("H", "T", &one, "P", &one, "").unwrap_err();
    assert_eq!(err.to_string(), "Fluid name is missing.");

    let err = session
        .props_si("H", "T", &CellValue::Empty, "P", &one, "Water")
        .unwrap_err();
    assert_eq!(err.to_string(), "First property value is missing.");

    let err = session
        .ha_props_si("W", "T", &one, "R", &one, "", &one)
        .unwrap_err();
    assert_eq!(err.to_string(), "Third property name is missing.");

    let err = session
        .props_si("H", "T", &one, "P", &CellValue::from("warm"), "Water")
        .unwrap_err();
    assert_eq!(err.to_string(), "Second property value is not a number.");

    assert_eq!(engine.call_count(), 0);
}
