//! Scripted engine standing in for the CoolProp library.

#![allow(dead_code)]

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use tp_core::PropsResult;
use tp_native::Engine;

/// One recorded numeric call: canonical names and SI values as sent.
#[derive(Debug, Clone, PartialEq)]
pub struct Call {
    pub output: String,
    pub inputs: Vec<(String, f64)>,
    pub fluid: Option<String>,
}

/// Answers every numeric call with `respond(call)` and counts calls.
pub struct StubEngine {
    pub respond: Box<dyn Fn(&Call) -> f64 + Send + Sync>,
    pub errstring: Option<String>,
    pub phase: Option<String>,
    pub fluid_param: Option<String>,
    pub global_param: Option<String>,
    pub calls: AtomicUsize,
    pub log: Mutex<Vec<Call>>,
}

impl StubEngine {
    pub fn returning(value: f64) -> Self {
        Self::with(move |_| value)
    }

    pub fn with(respond: impl Fn(&Call) -> f64 + Send + Sync + 'static) -> Self {
        Self {
            respond: Box::new(respond),
            errstring: None,
            phase: None,
            fluid_param: None,
            global_param: None,
            calls: AtomicUsize::new(0),
            log: Mutex::new(Vec::new()),
        }
    }

    pub fn errstring(mut self, text: &str) -> Self {
        self.errstring = Some(text.to_string());
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn log(&self) -> Vec<Call> {
        self.log.lock().unwrap().clone()
    }

    fn record(&self, call: Call) -> f64 {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let value = (self.respond)(&call);
        self.log.lock().unwrap().push(call);
        value
    }
}

impl Engine for StubEngine {
    fn props_si(
        &self,
        output: &str,
        name1: &str,
        value1: f64,
        name2: &str,
        value2: f64,
        fluid: &str,
    ) -> PropsResult<f64> {
        Ok(self.record(Call {
            output: output.into(),
            inputs: vec![(name1.into(), value1), (name2.into(), value2)],
            fluid: Some(fluid.into()),
        }))
    }

    fn props1_si(&self, output: &str, fluid: &str) -> PropsResult<f64> {
        Ok(self.record(Call {
            output: output.into(),
            inputs: vec![],
            fluid: Some(fluid.into()),
        }))
    }

    fn phase_si(
        &self,
        name1: &str,
        value1: f64,
        name2: &str,
        value2: f64,
        fluid: &str,
    ) -> PropsResult<Option<String>> {
        self.record(Call {
            output: "Phase".into(),
            inputs: vec![(name1.into(), value1), (name2.into(), value2)],
            fluid: Some(fluid.into()),
        });
        Ok(self.phase.clone())
    }

    fn ha_props_si(
        &self,
        output: &str,
        name1: &str,
        value1: f64,
        name2: &str,
        value2: f64,
        name3: &str,
        value3: f64,
    ) -> PropsResult<f64> {
        Ok(self.record(Call {
            output: output.into(),
            inputs: vec![
                (name1.into(), value1),
                (name2.into(), value2),
                (name3.into(), value3),
            ],
            fluid: None,
        }))
    }

    fn global_param_string(&self, param: &str) -> PropsResult<Option<String>> {
        if param == "errstring" {
            return Ok(self.errstring.clone());
        }
        Ok(self.global_param.clone())
    }

    fn fluid_param_string(&self, _fluid: &str, _param: &str) -> PropsResult<Option<String>> {
        Ok(self.fluid_param.clone())
    }
}
