use std::rc::Rc;

use chrono::{DateTime, TimeZone, Utc};
use yamlet::{DateStrategy, Encodable, Options, Result, Scope, Value};

fn moment() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 1, 12, 34, 56).unwrap()
}

fn with_strategy(strategy: DateStrategy) -> Options {
    Options {
        date_strategy: strategy,
        ..Options::default()
    }
}

#[test]
fn structural_is_the_default() -> Result<()> {
    let dt = moment();
    let out = yamlet::encode_to_string(&dt, &Options::default())?;
    assert_eq!(out, format!("secs: {}\nnanos: 0", dt.timestamp()));
    Ok(())
}

#[test]
fn seconds_since_epoch() -> Result<()> {
    let dt = moment();
    let out = yamlet::encode_to_string(&dt, &with_strategy(DateStrategy::SecondsSince1970))?;
    assert_eq!(out, dt.timestamp().to_string());
    Ok(())
}

#[test]
fn fractional_seconds_keep_subsecond_precision() -> Result<()> {
    let dt = Utc.timestamp_opt(1, 500_000_000).unwrap();
    let out = yamlet::encode_to_string(&dt, &with_strategy(DateStrategy::SecondsSince1970))?;
    assert_eq!(out, "1.5");
    Ok(())
}

#[test]
fn milliseconds_since_epoch() -> Result<()> {
    let dt = moment();
    let out =
        yamlet::encode_to_string(&dt, &with_strategy(DateStrategy::MillisecondsSince1970))?;
    assert_eq!(out, dt.timestamp_millis().to_string());
    Ok(())
}

#[test]
fn rfc3339_renders_a_calendar_string() -> Result<()> {
    let out = yamlet::encode_to_string(&moment(), &with_strategy(DateStrategy::Rfc3339))?;
    assert_eq!(out, "2024-05-01T12:34:56Z");
    Ok(())
}

#[test]
fn custom_hook_writes_through_the_scope() -> Result<()> {
    let strategy = DateStrategy::Custom(Rc::new(|date: &DateTime<Utc>, scope: &mut Scope| {
        let mut object = scope.object();
        object.set("year", Value::Number("2024".to_string()));
        object.encode("epoch", &date.timestamp())?;
        Ok(())
    }));
    let out = yamlet::encode_to_string(&moment(), &with_strategy(strategy))?;
    assert_eq!(out, format!("year: 2024\nepoch: {}", moment().timestamp()));
    Ok(())
}

#[test]
fn silent_hook_yields_an_empty_object_at_nested_positions() -> Result<()> {
    struct Record {
        when: DateTime<Utc>,
    }
    impl Encodable for Record {
        fn encode(&self, scope: &mut Scope) -> Result<()> {
            let mut object = scope.object();
            object.encode("when", &self.when)?;
            object.set("id", 7i64);
            Ok(())
        }
    }

    let strategy = DateStrategy::Custom(Rc::new(|_: &DateTime<Utc>, _: &mut Scope| Ok(())));
    let out = yamlet::encode_to_string(&Record { when: moment() }, &with_strategy(strategy))?;
    assert_eq!(out, "when:\nid: 7");
    Ok(())
}

#[test]
fn silent_hook_at_the_root_is_no_values_encoded() {
    let strategy = DateStrategy::Custom(Rc::new(|_: &DateTime<Utc>, _: &mut Scope| Ok(())));
    let err = yamlet::encode_to_string(&moment(), &with_strategy(strategy)).expect_err("fails");
    assert!(matches!(err, yamlet::Error::NoValuesEncoded));
}
