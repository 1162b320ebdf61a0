//! Waveform output documents.
//!
//! The [`WaveformWriter`] trait abstracts the output format.
//! [`WaveDromWriter`] produces the `{"signal": [...]}` JSON document read by
//! WaveDrom. [`VcdWriter`] produces an IEEE 1364 Value Change Dump that
//! GTKWave, Surfer and other viewers can open.

use std::io::Write;

use netsim_config::{OutputFormat, SimulatorConfig};
use serde::Serialize;

use crate::error::SimError;
use crate::trace::SignalTraces;

/// Output document format.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WaveformFormat {
    /// WaveDrom JSON.
    WaveDrom,
    /// Value Change Dump (IEEE 1364).
    Vcd,
}

impl WaveformFormat {
    /// File extension of documents in this format, without the dot.
    pub fn extension(self) -> &'static str {
        match self {
            WaveformFormat::WaveDrom => "json",
            WaveformFormat::Vcd => "vcd",
        }
    }

    /// The format whose documents use `ext`, ignoring ASCII case.
    pub fn from_extension(ext: &str) -> Option<Self> {
        if ext.eq_ignore_ascii_case("json") {
            Some(WaveformFormat::WaveDrom)
        } else if ext.eq_ignore_ascii_case("vcd") {
            Some(WaveformFormat::Vcd)
        } else {
            None
        }
    }
}

impl From<OutputFormat> for WaveformFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::WaveDrom => WaveformFormat::WaveDrom,
            OutputFormat::Vcd => WaveformFormat::Vcd,
        }
    }
}

/// Serializes finished traces to an output document.
pub trait WaveformWriter {
    /// Writes the whole document for `traces` to `out`.
    fn write(&self, traces: &SignalTraces, out: &mut dyn Write) -> Result<(), SimError>;

    /// Renders the document into a string.
    fn render(&self, traces: &SignalTraces) -> Result<String, SimError> {
        let mut buf = Vec::new();
        self.write(traces, &mut buf)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}

/// Builds the writer for `format`, configured from `config`.
pub fn writer_for(format: WaveformFormat, config: &SimulatorConfig) -> Box<dyn WaveformWriter> {
    match format {
        WaveformFormat::WaveDrom => Box::new(WaveDromWriter {
            pretty: config.output.pretty,
            collapse_repeats: config.output.collapse_repeats,
        }),
        WaveformFormat::Vcd => Box::new(VcdWriter {
            timescale: config.vcd.timescale.clone(),
            scope: config.vcd.scope.clone(),
        }),
    }
}

/// WaveDrom JSON writer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WaveDromWriter {
    /// Indent with two spaces instead of writing one line.
    pub pretty: bool,
    /// Write `.` for a value equal to the previous event's.
    pub collapse_repeats: bool,
}

impl Default for WaveDromWriter {
    fn default() -> Self {
        Self {
            pretty: true,
            collapse_repeats: false,
        }
    }
}

#[derive(Serialize)]
struct WaveDoc<'a> {
    signal: Vec<WaveEntry<'a>>,
}

#[derive(Serialize)]
struct WaveEntry<'a> {
    name: &'a str,
    wave: String,
}

impl WaveDromWriter {
    fn wave(&self, values: &[bool]) -> String {
        let mut wave = String::with_capacity(values.len());
        let mut previous = None;
        for &v in values {
            if self.collapse_repeats && previous == Some(v) {
                wave.push('.');
            } else {
                wave.push(if v { '1' } else { '0' });
            }
            previous = Some(v);
        }
        wave
    }
}

impl WaveformWriter for WaveDromWriter {
    fn write(&self, traces: &SignalTraces, out: &mut dyn Write) -> Result<(), SimError> {
        let doc = WaveDoc {
            signal: traces
                .iter()
                .map(|t| WaveEntry {
                    name: &t.name,
                    wave: self.wave(&t.values),
                })
                .collect(),
        };
        if self.pretty {
            serde_json::to_writer_pretty(&mut *out, &doc)?;
        } else {
            serde_json::to_writer(&mut *out, &doc)?;
        }
        writeln!(out)?;
        out.flush()?;
        Ok(())
    }
}

/// VCD writer.
///
/// Each stimulus time becomes a VCD timestamp in units of `timescale`. The
/// first event dumps every signal; later events list only the signals whose
/// value changed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VcdWriter {
    /// `$timescale` value, e.g. `1ns`.
    pub timescale: String,
    /// Name of the module scope holding all signals.
    pub scope: String,
}

impl Default for VcdWriter {
    fn default() -> Self {
        Self {
            timescale: "1ns".to_string(),
            scope: "top".to_string(),
        }
    }
}

impl VcdWriter {
    /// Identifier code for the signal at `index`.
    ///
    /// Uses the printable ASCII characters `!` through `~`, growing to more
    /// characters past index 93.
    fn id_code(index: usize) -> String {
        let mut code = String::new();
        let mut idx = index;
        loop {
            code.push(char::from(b'!' + (idx % 94) as u8));
            idx /= 94;
            if idx == 0 {
                break;
            }
            idx -= 1;
        }
        code
    }

    fn bit(value: bool) -> char {
        if value {
            '1'
        } else {
            '0'
        }
    }

    /// Writes everything up to `$enddefinitions` and returns each signal's code.
    fn write_header(
        &self,
        traces: &SignalTraces,
        out: &mut dyn Write,
    ) -> Result<Vec<String>, SimError> {
        writeln!(out, "$version")?;
        writeln!(out, "  netsim {}", env!("CARGO_PKG_VERSION"))?;
        writeln!(out, "$end")?;
        writeln!(out, "$timescale")?;
        writeln!(out, "  {}", self.timescale)?;
        writeln!(out, "$end")?;
        writeln!(out, "$scope module {} $end", self.scope)?;
        let mut codes = Vec::with_capacity(traces.len());
        for (idx, trace) in traces.iter().enumerate() {
            let code = Self::id_code(idx);
            writeln!(out, "$var wire 1 {code} {} $end", trace.name)?;
            codes.push(code);
        }
        writeln!(out, "$upscope $end")?;
        writeln!(out, "$enddefinitions $end")?;
        Ok(codes)
    }
}

impl WaveformWriter for VcdWriter {
    fn write(&self, traces: &SignalTraces, out: &mut dyn Write) -> Result<(), SimError> {
        let codes = self.write_header(traces, out)?;

        for (event, &time) in traces.times().iter().enumerate() {
            if event == 0 {
                writeln!(out, "#{time}")?;
                writeln!(out, "$dumpvars")?;
                for (trace, code) in traces.iter().zip(&codes) {
                    writeln!(out, "{}{code}", Self::bit(trace.values[0]))?;
                }
                writeln!(out, "$end")?;
                continue;
            }

            let mut stamped = false;
            for (trace, code) in traces.iter().zip(&codes) {
                let value = trace.values[event];
                if value == trace.values[event - 1] {
                    continue;
                }
                if !stamped {
                    writeln!(out, "#{time}")?;
                    stamped = true;
                }
                writeln!(out, "{}{code}", Self::bit(value))?;
            }
        }
        out.flush()?;
        Ok(())
    }
}
