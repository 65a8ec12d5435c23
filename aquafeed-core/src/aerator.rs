//! Aerator Recommendation
//!
//! Decides whether a paddlewheel aerator should be switched on, switched off
//! or left alone, from the current reading, the aerator's state and the
//! recent DO history.
//!
//! ## Decision Order
//!
//! ```text
//! Aerator off                                  action    urgency  conf
//!   DO < 5.5                                   on        high     95
//!   NH3 > 0.1                                  on        high     92
//!   DO < 6.2 and DO change < -0.15             on        medium   88
//!   DO < 6.5 and NH3 > 0.05                    on        medium   82
//!   otherwise                                  maintain  low      75
//!
//! Aerator on
//!   DO > 6.5, stable, NH3 < 0.05, temp < 29    off       low      88
//!   DO > 7.0 and NH3 < 0.03                    off       low      82
//!   otherwise                                  maintain  low      75
//! ```
//!
//! "DO change" is the last minus the first DO value over the most recent
//! [`DO_CHANGE_WINDOW`] samples, zero with fewer than two. The pond is stable
//! when that change is within ±[`DO_STABLE_BAND_MGL`].

use core::fmt;

use heapless::Vec;

use crate::{constants::aeration::*, reading::SensorReading, stats::mean};

/// What to do with the aerator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AeratorAction {
    /// Switch the aerator on
    TurnOn,
    /// Switch the aerator off
    TurnOff,
    /// Leave it in its current state
    Maintain,
}

impl fmt::Display for AeratorAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::TurnOn => "Turn on aerator",
            Self::TurnOff => "Turn off aerator",
            Self::Maintain => "Maintain aerator state",
        };
        f.write_str(text)
    }
}

/// How soon the action should happen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AeratorUrgency {
    /// Act now
    High,
    /// Act within the hour
    Medium,
    /// No time pressure
    Low,
}

impl fmt::Display for AeratorUrgency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        };
        f.write_str(text)
    }
}

/// One line of justification, carrying the values it refers to
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AeratorReason {
    /// DO below the safe threshold
    CriticalDo {
        /// Current DO (mg/L)
        do_mgl: f32,
    },
    /// Fish stress follows unless aeration starts now
    ImmediateAerationRequired,
    /// DO gain expected after switching on
    ExpectedDoIncrease,
    /// Ammonia above the danger limit
    DangerousAmmonia {
        /// Current ammonia (mg/L)
        ammonia_mgl: f32,
    },
    /// Circulation is needed to dilute ammonia
    CirculationNeeded,
    /// Mixing reduces toxic buildup
    MixingReducesBuildup,
    /// DO low and falling
    DoDeclining {
        /// Current DO (mg/L)
        do_mgl: f32,
        /// DO change over the recent window (mg/L)
        change_mgl: f32,
    },
    /// Switch on before DO reaches the critical level
    PreventiveActivation,
    /// Average DO over the recent window
    AverageDo {
        /// Mean DO (mg/L)
        do_mgl: f32,
    },
    /// DO and ammonia both slightly off
    SuboptimalConditions {
        /// Current DO (mg/L)
        do_mgl: f32,
        /// Current ammonia (mg/L)
        ammonia_mgl: f32,
    },
    /// Aeration helps oxygen and ammonia together
    ImprovesOxygenAndAmmonia,
    /// Acting early keeps the fish healthy
    ProactiveManagement,
    /// DO is fine
    DoOptimal {
        /// Current DO (mg/L)
        do_mgl: f32,
    },
    /// Ammonia is fine
    AmmoniaAcceptable {
        /// Current ammonia (mg/L)
        ammonia_mgl: f32,
    },
    /// Nothing calls for aeration
    ActivationNotRequired,
    /// DO comfortably above target
    ExcellentDo {
        /// Current DO (mg/L)
        do_mgl: f32,
    },
    /// Ammonia well below its limit
    AmmoniaControlled {
        /// Current ammonia (mg/L)
        ammonia_mgl: f32,
    },
    /// Every parameter stable and in range
    ParametersStable,
    /// Switching off saves energy
    EnergyConservation,
    /// DO above the surplus level
    DoExceedsTarget {
        /// Current DO (mg/L)
        do_mgl: f32,
    },
    /// Hardly any ammonia
    MinimalAmmonia,
    /// Aeration no longer pays for itself
    NoLongerRequired,
    /// The running aerator is what holds DO up
    MaintainingDo {
        /// Current DO (mg/L)
        do_mgl: f32,
    },
    /// Keep running
    ContinueOperation,
    /// Ammonia still benefits from circulation
    AmmoniaCirculation {
        /// Current ammonia (mg/L)
        ammonia_mgl: f32,
    },
}

/// Most reasons attached to one recommendation
pub const MAX_AERATOR_REASONS: usize = 4;

impl fmt::Display for AeratorReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::CriticalDo { do_mgl } => write!(
                f,
                "Critical DO level: {do_mgl:.1} mg/L (below safe threshold of {DO_CRITICAL_MGL} mg/L)"
            ),
            Self::ImmediateAerationRequired => {
                f.write_str("Immediate aeration required to prevent fish stress and mortality")
            }
            Self::ExpectedDoIncrease => write!(
                f,
                "Expected DO increase: +{EXPECTED_DO_RISE_MGL} mg/L within 30 minutes of activation"
            ),
            Self::DangerousAmmonia { ammonia_mgl } => write!(
                f,
                "Dangerous ammonia level: {ammonia_mgl:.3} mg/L (exceeds {AMMONIA_DANGER_MGL} mg/L limit)"
            ),
            Self::CirculationNeeded => f.write_str(
                "Increased water circulation needed to reduce ammonia concentration",
            ),
            Self::MixingReducesBuildup => {
                f.write_str("Aerator will improve water mixing and reduce toxic buildup")
            }
            Self::DoDeclining { do_mgl, change_mgl } => write!(
                f,
                "DO declining: {do_mgl:.1} mg/L with downward trend of {change_mgl:.2} mg/L"
            ),
            Self::PreventiveActivation => {
                f.write_str("Preventive activation recommended before reaching critical threshold")
            }
            Self::AverageDo { do_mgl } => write!(f, "Average DO over last hour: {do_mgl:.1} mg/L"),
            Self::SuboptimalConditions { do_mgl, ammonia_mgl } => write!(
                f,
                "Sub-optimal conditions detected: DO at {do_mgl:.1} mg/L, ammonia at {ammonia_mgl:.3} mg/L"
            ),
            Self::ImprovesOxygenAndAmmonia => f.write_str(
                "Aerator activation will improve both oxygen levels and ammonia dispersion",
            ),
            Self::ProactiveManagement => {
                f.write_str("Proactive water quality management to maintain fish health")
            }
            Self::DoOptimal { do_mgl } => {
                write!(f, "Current DO: {do_mgl:.1} mg/L - within optimal range")
            }
            Self::AmmoniaAcceptable { ammonia_mgl } => {
                write!(f, "Ammonia: {ammonia_mgl:.3} mg/L - acceptable level")
            }
            Self::ActivationNotRequired => f.write_str(
                "All parameters stable, aerator activation not required at this time",
            ),
            Self::ExcellentDo { do_mgl } => write!(
                f,
                "Excellent DO level: {do_mgl:.1} mg/L (above {DO_TARGET_MGL} mg/L target)"
            ),
            Self::AmmoniaControlled { ammonia_mgl } => {
                write!(f, "Ammonia well controlled: {ammonia_mgl:.3} mg/L")
            }
            Self::ParametersStable => f.write_str("All parameters stable and within optimal ranges"),
            Self::EnergyConservation => {
                f.write_str("Energy conservation: aerator can be deactivated safely")
            }
            Self::DoExceedsTarget { do_mgl } => write!(f, "DO exceeds target: {do_mgl:.1} mg/L"),
            Self::MinimalAmmonia => f.write_str("Minimal ammonia detected, excellent water quality"),
            Self::NoLongerRequired => {
                f.write_str("Aerator no longer required, can reduce operational costs")
            }
            Self::MaintainingDo { do_mgl } => {
                write!(f, "Aerator maintaining DO at {do_mgl:.1} mg/L")
            }
            Self::ContinueOperation => f.write_str("Continue operation to sustain optimal conditions"),
            Self::AmmoniaCirculation { ammonia_mgl } => write!(
                f,
                "Ammonia at {ammonia_mgl:.3} mg/L - continued circulation beneficial"
            ),
        }
    }
}

/// Expected effect of switching the aerator on
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AeratorImpact {
    /// DO rises by [`EXPECTED_DO_RISE_MGL`]
    DoRise {
        /// DO now (mg/L)
        from_mgl: f32,
        /// DO expected after 30 minutes (mg/L)
        to_mgl: f32,
    },
    /// Ammonia drops by about a fifth within the hour
    AmmoniaDecrease,
    /// DO stops falling
    StabilizeDo,
    /// DO and ammonia both improve within 45 minutes
    BothImprove,
}

impl fmt::Display for AeratorImpact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::DoRise { from_mgl, to_mgl } => {
                write!(f, "DO will rise from {from_mgl:.1} to ~{to_mgl:.1} mg/L")
            }
            Self::AmmoniaDecrease => {
                f.write_str("Ammonia will decrease by approximately 20% within 1 hour")
            }
            Self::StabilizeDo => f.write_str("Will stabilize DO and prevent further decline"),
            Self::BothImprove => {
                f.write_str("Both DO and ammonia levels will improve within 45 minutes")
            }
        }
    }
}

/// Aerator decision with its justification
#[derive(Debug, Clone, PartialEq)]
pub struct AeratorRecommendation {
    /// What to do
    pub action: AeratorAction,
    /// How soon
    pub urgency: AeratorUrgency,
    /// Confidence in the decision (%)
    pub confidence_pct: u8,
    /// Justification, most important first
    pub reasons: Vec<AeratorReason, MAX_AERATOR_REASONS>,
    /// Expected effect, only given when switching on
    pub expected_impact: Option<AeratorImpact>,
}

impl AeratorRecommendation {
    fn new<const N: usize>(
        action: AeratorAction,
        urgency: AeratorUrgency,
        confidence_pct: u8,
        reasons: [AeratorReason; N],
        expected_impact: Option<AeratorImpact>,
    ) -> Self {
        Self {
            action,
            urgency,
            confidence_pct,
            reasons: reasons.into_iter().collect(),
            expected_impact,
        }
    }
}

impl fmt::Display for AeratorRecommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({} urgency, {}% confidence)",
            self.action, self.urgency, self.confidence_pct
        )
    }
}

/// DO change and mean over the most recent window
fn recent_do(history: &[SensorReading]) -> (f32, f32) {
    let start = history.len().saturating_sub(DO_CHANGE_WINDOW);
    let recent = &history[start..];

    let mut values = [0.0f32; DO_CHANGE_WINDOW];
    for (slot, reading) in values.iter_mut().zip(recent) {
        *slot = reading.dissolved_oxygen_mgl;
    }
    let values = &values[..recent.len()];

    let change = match values {
        [first, .., last] => last - first,
        _ => 0.0,
    };
    (change, mean(values))
}

/// Recommend an aerator action
///
/// `history` is oldest first and may include `current`; only its last
/// [`DO_CHANGE_WINDOW`] samples are read.
pub fn aerator_recommendation(
    current: &SensorReading,
    aerator_active: bool,
    history: &[SensorReading],
) -> AeratorRecommendation {
    use AeratorAction::*;
    use AeratorReason::*;
    use AeratorUrgency::*;

    let do_mgl = current.dissolved_oxygen_mgl;
    let ammonia_mgl = current.ammonia_mgl;
    let (change_mgl, average_mgl) = recent_do(history);
    let stable = libm::fabsf(change_mgl) < DO_STABLE_BAND_MGL;

    if !aerator_active {
        if do_mgl < DO_CRITICAL_MGL {
            log_warn!("Aerator: critical DO {} mg/L", do_mgl);
            return AeratorRecommendation::new(
                TurnOn,
                High,
                CONFIDENCE_CRITICAL_DO,
                [CriticalDo { do_mgl }, ImmediateAerationRequired, ExpectedDoIncrease],
                Some(AeratorImpact::DoRise {
                    from_mgl: do_mgl,
                    to_mgl: do_mgl + EXPECTED_DO_RISE_MGL,
                }),
            );
        }

        if ammonia_mgl > AMMONIA_DANGER_MGL {
            return AeratorRecommendation::new(
                TurnOn,
                High,
                CONFIDENCE_DANGEROUS_AMMONIA,
                [DangerousAmmonia { ammonia_mgl }, CirculationNeeded, MixingReducesBuildup],
                Some(AeratorImpact::AmmoniaDecrease),
            );
        }

        if do_mgl < DO_DECLINE_WATCH_MGL && change_mgl < DO_DECLINE_CHANGE_MGL {
            return AeratorRecommendation::new(
                TurnOn,
                Medium,
                CONFIDENCE_DO_DECLINE,
                [
                    DoDeclining { do_mgl, change_mgl },
                    PreventiveActivation,
                    AverageDo { do_mgl: average_mgl },
                ],
                Some(AeratorImpact::StabilizeDo),
            );
        }

        if do_mgl < DO_SUBOPTIMAL_MGL && ammonia_mgl > AMMONIA_ELEVATED_MGL {
            return AeratorRecommendation::new(
                TurnOn,
                Medium,
                CONFIDENCE_SUBOPTIMAL,
                [
                    SuboptimalConditions { do_mgl, ammonia_mgl },
                    ImprovesOxygenAndAmmonia,
                    ProactiveManagement,
                ],
                Some(AeratorImpact::BothImprove),
            );
        }

        return AeratorRecommendation::new(
            Maintain,
            Low,
            CONFIDENCE_MAINTAIN,
            [DoOptimal { do_mgl }, AmmoniaAcceptable { ammonia_mgl }, ActivationNotRequired],
            None,
        );
    }

    if do_mgl > DO_TARGET_MGL
        && stable
        && ammonia_mgl < AMMONIA_ELEVATED_MGL
        && current.temperature_c < SHUTOFF_TEMP_MAX_C
    {
        return AeratorRecommendation::new(
            TurnOff,
            Low,
            CONFIDENCE_STABLE_SHUTOFF,
            [
                ExcellentDo { do_mgl },
                AmmoniaControlled { ammonia_mgl },
                ParametersStable,
                EnergyConservation,
            ],
            None,
        );
    }

    if do_mgl > DO_SURPLUS_MGL && ammonia_mgl < AMMONIA_MINIMAL_MGL {
        return AeratorRecommendation::new(
            TurnOff,
            Low,
            CONFIDENCE_SURPLUS_SHUTOFF,
            [DoExceedsTarget { do_mgl }, MinimalAmmonia, NoLongerRequired],
            None,
        );
    }

    let mut rec = AeratorRecommendation::new(
        Maintain,
        Low,
        CONFIDENCE_MAINTAIN,
        [MaintainingDo { do_mgl }, ContinueOperation],
        None,
    );
    if ammonia_mgl > AMMONIA_ELEVATED_MGL {
        // Two reasons so far, capacity is four
        let pushed = rec.reasons.push(AmmoniaCirculation { ammonia_mgl });
        debug_assert!(pushed.is_ok());
    }
    rec
}
