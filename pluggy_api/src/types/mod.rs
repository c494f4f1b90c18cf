mod meta;
pub use self::meta::{CurrencyCode, PageResponse};

mod connector;
pub use self::connector::{
    Connector, ConnectorCredential, ConnectorHealth, ConnectorId, ConnectorType,
    CredentialSelectOption, CredentialType, HealthStage, HealthStatus, ProductType,
};

mod item;
pub use self::item::{
    CreateItem, ExecutionErrorResult, ExecutionStatus, Item, ItemStatus, Parameters, UpdateItem,
    UserAction,
};

mod account;
pub use self::account::{Account, AccountSubtype, AccountType, BankData, CreditData};

mod transaction;
pub use self::transaction::{
    CreditCardMetadata, DocumentNumber, PaymentData, PaymentParticipant, Transaction,
    TransactionMerchant, TransactionStatus, TransactionType,
};

mod investment;
pub use self::investment::{
    Investment, InvestmentInstitution, InvestmentStatus, InvestmentTransaction,
    InvestmentTransactionType, InvestmentType, MovementType,
};

mod loan;
pub use self::loan::{Loan, LoanInstallments, LoanInterestRate, LoanPayments, LoanWarranty};

mod identity;
pub use self::identity::{Address, Email, IdentityRelation, IdentityResponse, PhoneNumber};

mod category;
pub use self::category::Category;

mod webhook;
pub use self::webhook::{CreateWebhook, UpdateWebhook, Webhook, WebhookEvent, WebhookEventPayload};

mod opportunity;
pub use self::opportunity::{Opportunity, OpportunityDateType, OpportunityType};

mod misc;
pub use self::misc::{
    ConnectToken, ConnectTokenOptions, IncomeReport, ValidationError, ValidationResult,
};
