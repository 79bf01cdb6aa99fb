//! # Leg Control Library
//!
//! Leg/gait coordination engine for the Strider quadruped - a small robot pet
//! walking on four Theo Jansen style legs, each driven by a pair of servos.
//!
//! The library is responsible for:
//! - Smooth, rate-limited sweeps of individual servos ([`sweep`])
//! - The per-leg motion primitive, including the mechanical inversion of the
//!   inner servo and the current-limiting stagger between servos ([`leg`])
//! - Whole-rig composite poses and the named behaviour library ([`rig`])
//! - The continuous, cancellable diagonal-gait walking cycle ([`gait_ctrl`])
//!
//! The servo driver itself is an external collaborator, abstracted behind the
//! [`servo_ctrl::ServoDriver`] trait. The neck, tail, eyes, speech and camera
//! subsystems are separate resources outside this library's ownership.

// ---------------------------------------------------------------------------
// MODULES
// ---------------------------------------------------------------------------

/// Interface to the servo drivers consumed by the engine.
pub mod servo_ctrl;

/// Smooth servo sweep primitive.
pub mod sweep;

/// Single leg control.
pub mod leg;

/// Whole rig control - composite poses and the behaviour library.
pub mod rig;

/// Walking gait state machine.
pub mod gait_ctrl;

/// Parameters for the leg control library.
pub mod params;

// ---------------------------------------------------------------------------
// REEXPORTS
// ---------------------------------------------------------------------------

pub use params::LegCtrlParams;
