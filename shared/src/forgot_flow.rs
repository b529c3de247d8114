use log::{debug, warn};

use crate::constants::SEND_EMAIL_ERROR;
use crate::gateway::GatewayResult;
use crate::password_reset::ForgotPasswordRequest;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ForgotStatus {
    Preparing,
    /// No email to send to; the page leaves for the login route.
    Redirect,
    Ready,
    Sending,
    /// `settling` holds the control disabled for a moment after a successful send.
    Sent { settling: bool },
    SendError { message: String },
}

/// Tracks the "send reset email" screen. Sending is always user-triggered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForgotPasswordFlow {
    email: Option<String>,
    status: ForgotStatus,
    email_sent: bool,
}

impl ForgotPasswordFlow {
    pub fn new(email: Option<String>) -> Self {
        Self {
            email: email.filter(|e| !e.trim().is_empty()),
            status: ForgotStatus::Preparing,
            email_sent: false,
        }
    }

    pub fn status(&self) -> &ForgotStatus {
        &self.status
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    /// Whether at least one send has succeeded on this screen.
    pub fn email_sent(&self) -> bool {
        self.email_sent
    }

    pub fn prepare(&mut self) -> &ForgotStatus {
        if self.status == ForgotStatus::Preparing {
            self.status = if self.email.is_some() {
                ForgotStatus::Ready
            } else {
                debug!("Forgot password opened without an email, redirecting");
                ForgotStatus::Redirect
            };
        }
        &self.status
    }

    /// Starts a send and returns the request to issue.
    ///
    /// Presses are not deduplicated: calling this again while `Sending` yields another request.
    pub fn begin_send(&mut self) -> Option<ForgotPasswordRequest> {
        match self.status {
            ForgotStatus::Preparing | ForgotStatus::Redirect => None,
            _ => {
                let email = self.email.clone()?;
                self.status = ForgotStatus::Sending;
                Some(ForgotPasswordRequest { email })
            }
        }
    }

    pub fn finish_send(&mut self, outcome: GatewayResult<()>) {
        if matches!(self.status, ForgotStatus::Preparing | ForgotStatus::Redirect) {
            return;
        }
        self.status = match outcome {
            Ok(()) => {
                debug!("Reset email sent");
                self.email_sent = true;
                ForgotStatus::Sent { settling: true }
            }
            Err(e) => {
                warn!("Reset email failed: {}", e);
                ForgotStatus::SendError {
                    message: SEND_EMAIL_ERROR.to_string(),
                }
            }
        };
    }

    pub fn settle(&mut self) {
        if self.status == (ForgotStatus::Sent { settling: true }) {
            self.status = ForgotStatus::Sent { settling: false };
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.status {
            ForgotStatus::SendError { message } => Some(message),
            _ => None,
        }
    }

    pub fn control_enabled(&self) -> bool {
        matches!(
            self.status,
            ForgotStatus::Ready | ForgotStatus::Sent { settling: false } | ForgotStatus::SendError { .. }
        )
    }

    pub fn button_label(&self) -> &'static str {
        match self.status {
            ForgotStatus::Sending | ForgotStatus::Sent { settling: true } => "Sending...",
            _ if self.email_sent => "Send Email Again",
            _ => "Send Email",
        }
    }

    pub fn show_sent_notice(&self) -> bool {
        self.status == (ForgotStatus::Sent { settling: false })
    }
}
