//! The two-phase launch-and-buy orchestrator.
//!
//! Control flows linearly: resolve identities, prepare metadata, create the
//! token (Phase 1), then optionally buy it (Phase 2). Phase 1 failures are
//! fatal and abort the workflow; Phase 2 failures are converted to a
//! [`BuyOutcome`] and reported alongside the successful creation. A buy is
//! never attempted against a mint whose creation has not confirmed.
//!
//! The orchestrator performs no retries and holds no shared mutable state:
//! each invocation owns its freshly generated asset identity.

use crate::collaborators::{
    BuyPlan, MetadataFields, MetadataPreparer, Submitter, TransactionBuilder,
};
use crate::config::LauncherConfig;
use crate::error::{LaunchError, Result};
use crate::identity;
use crate::outcome::{BuyOutcome, LaunchOutcome};
use crate::report::WorkflowReport;
use crate::request::LaunchRequest;
use lift_chain::{Address, Amount, Keypair, derive_addresses, tokens_to_base_units};
use tracing::{debug, info, warn};

/// How the optional buy is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BuyStrategy {
    /// Build the buy only after creation confirms (one builder call per
    /// phase).
    #[default]
    SeparatePhase,
    /// Build creation and buy in a single builder round trip; submission
    /// still happens per phase so a failed buy stays non-fatal.
    CombinedHelper,
}

/// The Launch-and-Buy Orchestrator.
pub struct Launcher<M, T, S> {
    config: LauncherConfig,
    preparer: M,
    builder: T,
    submitter: S,
    strategy: BuyStrategy,
}

impl<M, T, S> Launcher<M, T, S>
where
    M: MetadataPreparer,
    T: TransactionBuilder,
    S: Submitter,
{
    /// Create a launcher with the default buy strategy.
    #[must_use]
    pub fn new(config: LauncherConfig, preparer: M, builder: T, submitter: S) -> Self {
        Self {
            config,
            preparer,
            builder,
            submitter,
            strategy: BuyStrategy::default(),
        }
    }

    /// Override the buy strategy.
    #[must_use]
    pub fn with_strategy(mut self, strategy: BuyStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Execute the full workflow for a validated request.
    ///
    /// # Errors
    ///
    /// Returns a fatal [`LaunchError`] when configuration, identity,
    /// metadata, or Phase 1 fails. A failed Phase 2 is *not* an error; it
    /// is carried inside the returned report.
    pub async fn execute(&self, request: &LaunchRequest) -> Result<WorkflowReport> {
        // Identity first: cheap checks before any network round trip.
        let funder = identity::resolve_funding(&self.config)?;
        let mint = identity::generate_asset()?;
        info!(
            name = %request.name,
            symbol = %request.symbol,
            mint = %mint.address(),
            funder = %funder.address(),
            "launch workflow started"
        );

        // Amount conversion is still validation; it must fail before the
        // first collaborator round trip.
        let spend = Amount::try_sol(request.initial_buy_amount)
            .map_err(|e| LaunchError::validation(e.to_string()))?;
        let floor = tokens_to_base_units(request.minimum_token_out);
        let buy_requested = request.buy_requested();

        let fields = MetadataFields::from_request(request);
        let uri = self
            .preparer
            .prepare(&fields)
            .await
            .map_err(|e| LaunchError::metadata(e.to_string()))?;
        if uri.trim().is_empty() {
            return Err(LaunchError::metadata("preparer returned an empty URI"));
        }
        debug!(uri = %uri, "metadata prepared");

        // Phase 1 build. Under the combined strategy the buy transaction is
        // built in the same round trip; a failure here means no creation
        // was submitted either, so it is fatal like any other build error.
        let (creation, prebuilt_buy) = if buy_requested
            && self.strategy == BuyStrategy::CombinedHelper
        {
            let (creation, buy) = self
                .builder
                .build_creation_with_buy(
                    funder.address(),
                    mint.address(),
                    &request.name,
                    &request.symbol,
                    &uri,
                    spend,
                    floor,
                )
                .await
                .map_err(|e| LaunchError::creation(e.to_string()))?;
            (creation, Some(buy))
        } else {
            let creation = self
                .builder
                .build_creation(
                    funder.address(),
                    mint.address(),
                    &request.name,
                    &request.symbol,
                    &uri,
                )
                .await
                .map_err(|e| LaunchError::creation(e.to_string()))?;
            (creation, None)
        };

        // Phase 1 submit. The mint co-signs its own creation.
        let confirmed = self
            .submitter
            .submit_and_confirm(&creation.transaction, &[&funder, &mint])
            .await
            .map_err(|e| LaunchError::creation(e.to_string()))?;
        if !confirmed {
            return Err(LaunchError::creation(
                "creation transaction did not confirm",
            ));
        }

        let addresses = derive_addresses(mint.address());
        for (label, address) in addresses.labeled() {
            debug!(mint = %mint.address(), label, address = %address, "derived address");
        }
        info!(
            mint = %mint.address(),
            pool_state = %addresses.pool_state,
            "token created"
        );

        let launch = LaunchOutcome {
            name: request.name.clone(),
            symbol: request.symbol.clone(),
            mint: mint.address().clone(),
            addresses,
            uri,
            image: request.image.clone(),
            funder: funder.address().clone(),
        };

        // Phase 2, strictly sequenced after Phase 1's success signal.
        let buy = if buy_requested {
            Some(
                self.run_buy(&funder, mint.address(), spend, floor, prebuilt_buy)
                    .await,
            )
        } else {
            None
        };

        info!(
            mint = %mint.address(),
            buy_succeeded = buy.as_ref().is_none_or(BuyOutcome::succeeded),
            "launch workflow finished"
        );
        Ok(WorkflowReport::assemble(&launch, buy.as_ref()))
    }

    /// Run the optional buy. Every failure path collapses into a
    /// [`BuyOutcome::Failed`]; nothing escapes as an error.
    async fn run_buy(
        &self,
        funder: &Keypair,
        mint: &Address,
        spend: Amount,
        floor: u64,
        prebuilt: Option<BuyPlan>,
    ) -> BuyOutcome {
        let plan = match prebuilt {
            Some(plan) => plan,
            None => match self
                .builder
                .build_buy(funder.address(), mint, spend, floor)
                .await
            {
                Ok(plan) => plan,
                Err(e) => {
                    warn!(mint = %mint, error = %e, "initial buy build failed");
                    return BuyOutcome::Failed {
                        reason: Some(e.to_string()),
                    };
                }
            },
        };

        let mut signers: Vec<&Keypair> = vec![funder];
        signers.extend(plan.extra_signers.iter());

        match self
            .submitter
            .submit_and_confirm(&plan.transaction, &signers)
            .await
        {
            Ok(true) => {
                info!(mint = %mint, spent = %spend, "initial buy confirmed");
                BuyOutcome::Succeeded { spent: spend }
            }
            Ok(false) => {
                warn!(mint = %mint, "initial buy did not confirm");
                BuyOutcome::Failed { reason: None }
            }
            Err(e) => {
                warn!(mint = %mint, error = %e, "initial buy failed");
                BuyOutcome::Failed {
                    reason: Some(e.to_string()),
                }
            }
        }
    }
}
