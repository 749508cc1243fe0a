//! Every operation offered to the calling environment.
//!
//! Arguments are validated in a fixed order (output, property names, fluid,
//! then values) so the first problem reported is predictable. Names are
//! resolved through the alias tables before any unit conversion, because the
//! conversion rule depends on the canonical name.

use crate::broadcast::broadcast;
use crate::value::{Arg, CellValue, Evaluated, scalar};
use tp_core::{PropsError, PropsResult};
use tp_fluids::{MixtureBuilder, UnitSystem, resolve_fluid, resolve_humid_air, resolve_property};
use tp_native::{Engine, check_string, check_value};

const OUTPUT: &str = "Output parameter";
const NAME1: &str = "First property name";
const NAME2: &str = "Second property name";
const NAME3: &str = "Third property name";
const FLUID: &str = "Fluid name";
const PARAM: &str = "Parameter name";
const VALUE1: &str = "First property value";
const VALUE2: &str = "Second property value";
const VALUE3: &str = "Third property value";

fn required<'a>(what: &'static str, s: &'a str) -> PropsResult<&'a str> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        Err(PropsError::MissingArgument { what })
    } else {
        Ok(trimmed)
    }
}

/// Property queries against one engine.
#[derive(Clone, Copy)]
pub struct Session<'a> {
    engine: &'a dyn Engine,
}

impl<'a> Session<'a> {
    pub fn new(engine: &'a dyn Engine) -> Self {
        Self { engine }
    }

    /// Two-input state property, SI units.
    pub fn props_si(
        &self,
        output: &str,
        name1: &str,
        value1: &CellValue,
        name2: &str,
        value2: &CellValue,
        fluid: &str,
    ) -> PropsResult<Evaluated> {
        self.props_in(UnitSystem::Si, output, name1, value1, name2, value2, fluid)
    }

    /// Two-input state property, engineering units (°C, bar, kJ).
    pub fn props(
        &self,
        output: &str,
        name1: &str,
        value1: &CellValue,
        name2: &str,
        value2: &CellValue,
        fluid: &str,
    ) -> PropsResult<Evaluated> {
        self.props_in(
            UnitSystem::Engineering,
            output,
            name1,
            value1,
            name2,
            value2,
            fluid,
        )
    }

    /// Alias of [`Session::props`].
    pub fn tmpr(
        &self,
        output: &str,
        name1: &str,
        value1: &CellValue,
        name2: &str,
        value2: &CellValue,
        fluid: &str,
    ) -> PropsResult<Evaluated> {
        self.props(output, name1, value1, name2, value2, fluid)
    }

    #[allow(clippy::too_many_arguments)]
    fn props_in(
        &self,
        units: UnitSystem,
        output: &str,
        name1: &str,
        value1: &CellValue,
        name2: &str,
        value2: &CellValue,
        fluid: &str,
    ) -> PropsResult<Evaluated> {
        let output = resolve_property(required(OUTPUT, output)?);
        let name1 = resolve_property(required(NAME1, name1)?);
        let name2 = resolve_property(required(NAME2, name2)?);
        let fluid = resolve_fluid(required(FLUID, fluid)?);
        let arg1 = Arg::from_cell(VALUE1, value1)?.map(|v| units.input(&name1, v));
        let arg2 = Arg::from_cell(VALUE2, value2)?.map(|v| units.input(&name2, v));

        broadcast([("value1", &arg1), ("value2", &arg2)], |[v1, v2]| {
            let raw = self
                .engine
                .props_si(&output, &name1, v1, &name2, v2, &fluid)?;
            check_value(self.engine, raw).map(|v| units.output(&output, v))
        })
    }

    /// Phase name of a state, SI inputs.
    pub fn phase_si(
        &self,
        name1: &str,
        value1: &CellValue,
        name2: &str,
        value2: &CellValue,
        fluid: &str,
    ) -> PropsResult<String> {
        self.phase_in(UnitSystem::Si, name1, value1, name2, value2, fluid)
    }

    /// Phase name of a state, engineering inputs.
    pub fn phase(
        &self,
        name1: &str,
        value1: &CellValue,
        name2: &str,
        value2: &CellValue,
        fluid: &str,
    ) -> PropsResult<String> {
        self.phase_in(UnitSystem::Engineering, name1, value1, name2, value2, fluid)
    }

    fn phase_in(
        &self,
        units: UnitSystem,
        name1: &str,
        value1: &CellValue,
        name2: &str,
        value2: &CellValue,
        fluid: &str,
    ) -> PropsResult<String> {
        let name1 = resolve_property(required(NAME1, name1)?);
        let name2 = resolve_property(required(NAME2, name2)?);
        let fluid = resolve_fluid(required(FLUID, fluid)?);
        let v1 = units.input(&name1, scalar(VALUE1, value1)?);
        let v2 = units.input(&name2, scalar(VALUE2, value2)?);

        let raw = self.engine.phase_si(&name1, v1, &name2, v2, &fluid)?;
        check_string(self.engine, "phase", raw)
    }

    /// Single-input property (critical point, molar mass, ...), SI units.
    pub fn props1_si(&self, output: &str, fluid: &str) -> PropsResult<f64> {
        self.props1_in(UnitSystem::Si, output, fluid)
    }

    /// Single-input property, engineering units.
    pub fn props1(&self, output: &str, fluid: &str) -> PropsResult<f64> {
        self.props1_in(UnitSystem::Engineering, output, fluid)
    }

    fn props1_in(&self, units: UnitSystem, output: &str, fluid: &str) -> PropsResult<f64> {
        let output = resolve_property(required(OUTPUT, output)?);
        let fluid = resolve_fluid(required(FLUID, fluid)?);
        let raw = self.engine.props1_si(&output, &fluid)?;
        check_value(self.engine, raw).map(|v| units.output(&output, v))
    }

    /// Humid-air property from three inputs, SI units.
    #[allow(clippy::too_many_arguments)]
    pub fn ha_props_si(
        &self,
        output: &str,
        name1: &str,
        value1: &CellValue,
        name2: &str,
        value2: &CellValue,
        name3: &str,
        value3: &CellValue,
    ) -> PropsResult<Evaluated> {
        self.ha_props_in(
            UnitSystem::Si,
            [output, name1, name2, name3],
            [value1, value2, value3],
        )
    }

    /// Humid-air property from three inputs, engineering units.
    #[allow(clippy::too_many_arguments)]
    pub fn ha_props(
        &self,
        output: &str,
        name1: &str,
        value1: &CellValue,
        name2: &str,
        value2: &CellValue,
        name3: &str,
        value3: &CellValue,
    ) -> PropsResult<Evaluated> {
        self.ha_props_in(
            UnitSystem::Engineering,
            [output, name1, name2, name3],
            [value1, value2, value3],
        )
    }

    /// Alias of [`Session::ha_props`].
    #[allow(clippy::too_many_arguments)]
    pub fn tmpa(
        &self,
        output: &str,
        name1: &str,
        value1: &CellValue,
        name2: &str,
        value2: &CellValue,
        name3: &str,
        value3: &CellValue,
    ) -> PropsResult<Evaluated> {
        self.ha_props(output, name1, value1, name2, value2, name3, value3)
    }

    fn ha_props_in(
        &self,
        units: UnitSystem,
        [output, name1, name2, name3]: [&str; 4],
        [value1, value2, value3]: [&CellValue; 3],
    ) -> PropsResult<Evaluated> {
        let output = resolve_humid_air(required(OUTPUT, output)?);
        let name1 = resolve_humid_air(required(NAME1, name1)?);
        let name2 = resolve_humid_air(required(NAME2, name2)?);
        let name3 = resolve_humid_air(required(NAME3, name3)?);
        let arg1 = Arg::from_cell(VALUE1, value1)?.map(|v| units.input(&name1, v));
        let arg2 = Arg::from_cell(VALUE2, value2)?.map(|v| units.input(&name2, v));
        let arg3 = Arg::from_cell(VALUE3, value3)?.map(|v| units.input(&name3, v));

        broadcast(
            [("value1", &arg1), ("value2", &arg2), ("value3", &arg3)],
            |[v1, v2, v3]| {
                let raw = self
                    .engine
                    .ha_props_si(&output, &name1, v1, &name2, v2, &name3, v3)?;
                check_value(self.engine, raw).map(|v| units.output(&output, v))
            },
        )
    }

    /// Global parameter string such as `version` or `gitrevision`, trimmed.
    pub fn global_param(&self, param: &str) -> PropsResult<String> {
        let param = required(PARAM, param)?;
        let raw = self.engine.global_param_string(param)?;
        check_string(self.engine, &format!("global parameter '{param}'"), raw)
            .map(|s| s.trim().to_string())
    }

    /// Fluid parameter string such as `CAS` or `aliases`.
    pub fn fluid_param(&self, fluid: &str, param: &str) -> PropsResult<String> {
        let fluid = resolve_fluid(required(FLUID, fluid)?);
        let param = required(PARAM, param)?;
        let raw = self.engine.fluid_param_string(&fluid, param)?;
        check_string(
            self.engine,
            &format!("fluid parameter '{param}' for fluid '{fluid}'"),
            raw,
        )
    }
}

/// Cells of a mixture argument; a blank range counts as zero entries.
fn mixture_cells(cell: &CellValue) -> PropsResult<Vec<&CellValue>> {
    match cell {
        CellValue::Grid(rows) if rows.iter().all(Vec::is_empty) => Ok(Vec::new()),
        other => other.cells().map(|(cells, _)| cells),
    }
}

/// Build `HEOS::Name1[x1]&Name2[x2]...` from parallel name and fraction ranges.
///
/// Rows with a blank name are skipped together with their fraction.
pub fn mixture_string(elements: &CellValue, fractions: &CellValue) -> PropsResult<String> {
    let invalid = |what: String| PropsError::InvalidMixture { what };
    let names = mixture_cells(elements)?;
    let values = mixture_cells(fractions)?;
    if names.len() != values.len() {
        return Err(invalid(format!(
            "Number of elements ({}) must match number of fractions ({}).",
            names.len(),
            values.len()
        )));
    }
    if names.is_empty() {
        return Err(invalid("At least one element is required.".to_string()));
    }

    let mut builder = MixtureBuilder::new();
    for (i, (name, value)) in names.into_iter().zip(values).enumerate() {
        let position = i + 1;
        let Some(name) = name.as_text().filter(|n| !n.trim().is_empty()) else {
            continue;
        };
        let CellValue::Number(fraction) = value else {
            return Err(invalid(format!(
                "Fraction value at position {position} is not a number."
            )));
        };
        builder.push(position, &name, *fraction)?;
    }
    Ok(builder.build()?.to_string())
}
