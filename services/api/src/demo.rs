use crate::infra::{
    InMemoryComplianceRepository, InMemoryDocumentRepository, InMemoryNotificationRepository,
    InMemoryStorage,
};
use chrono::{Duration, Utc};
use clap::Args;
use std::sync::Arc;

use fleet_ops::error::AppError;
use fleet_ops::tenancy::{NotificationId, OrgContext, RoleName};
use fleet_ops::workflows::compliance::{
    ComplianceService, ComplianceStatus, ComplianceSubmission, ComplianceType, InspectionFields,
    Priority, ViolationFields, ViolationType,
};
use fleet_ops::workflows::documents::{
    DocumentCategory, DocumentPriority, DocumentService, NewDocument, UploadedFile,
};
use fleet_ops::workflows::notifications::{
    Channel, ComposeRequest, NotificationCategory, NotificationKind, NotificationPriority,
    NotificationService, RecipientTarget,
};

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Days until the demo compliance document expires.
    #[arg(long, default_value_t = 20)]
    pub(crate) expiring_days: u32,
    /// Skip the notification portion of the demo.
    #[arg(long)]
    pub(crate) skip_notifications: bool,
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        expiring_days,
        skip_notifications,
    } = args;

    let manager = OrgContext::new("org-demo", "user-mgr", "Avery Chen", "fleet_manager");
    let driver = OrgContext::new("org-demo", "user-drv", "Sam Okafor", "driver");

    println!("Fleet operations demo (org {})", manager.org_id.0);

    let storage = Arc::new(InMemoryStorage::default());
    let documents = DocumentService::new(
        Arc::new(InMemoryDocumentRepository::default()),
        storage.clone(),
        "fleet-documents",
    );

    println!("\nDocument lifecycle");
    let today = Utc::now().date_naive();
    let licence = documents
        .upload(
            &manager,
            NewDocument {
                name: "Operator licence".to_string(),
                category: DocumentCategory::Compliance,
                priority: DocumentPriority::High,
                expiry_date: Some(today + Duration::days(expiring_days as i64)),
                confidential: false,
                tags: vec!["licence".to_string()],
                version: "1.0".to_string(),
            },
            demo_file("operator-licence.pdf"),
        )
        .map_err(demo_failure)?;
    println!(
        "- Uploaded {} ({}) -> {}",
        licence.name,
        licence.category.label(),
        licence.storage_path
    );

    let insurance = documents
        .upload(
            &manager,
            NewDocument {
                name: "Fleet insurance certificate".to_string(),
                category: DocumentCategory::Insurance,
                priority: DocumentPriority::Critical,
                expiry_date: Some(today - Duration::days(3)),
                confidential: true,
                tags: Vec::new(),
                version: "2.1".to_string(),
            },
            demo_file("insurance-certificate.pdf"),
        )
        .map_err(demo_failure)?;
    println!(
        "- Uploaded {} (expired {})",
        insurance.name,
        insurance.expiry_date.map(|d| d.to_string()).unwrap_or_default()
    );

    documents
        .set_favorite(&manager, &licence.id, true)
        .map_err(demo_failure)?;

    let stats = documents.stats(&manager, Utc::now()).map_err(demo_failure)?;
    println!(
        "- Stats: {} total | {} expiring soon | {} expired | {} recently uploaded | {} favorites",
        stats.total, stats.expiring_soon, stats.expired, stats.recently_uploaded, stats.favorites
    );
    println!("- Blobs in storage: {}", storage.blob_count());

    println!("\nCompliance intake");
    let compliance_repo = Arc::new(InMemoryComplianceRepository::default());
    let compliance = ComplianceService::new(compliance_repo.clone());

    let inspection = compliance
        .submit(
            &manager,
            ComplianceSubmission {
                compliance_type: ComplianceType::VehicleInspection,
                vehicle_id: "veh-204".to_string(),
                driver_id: Some("drv-31".to_string()),
                compliance_date: Some(today),
                next_review_date: Some(today + Duration::days(90)),
                status: ComplianceStatus::Compliant,
                priority: Priority::Medium,
                severity: None,
                title: "Quarterly inspection".to_string(),
                description: "Full workshop inspection ahead of term restart.".to_string(),
                regulatory_body: Some("DVSA".to_string()),
                regulatory_reference: None,
                inspection: Some(InspectionFields {
                    defects_found: vec!["nearside mirror crack".to_string()],
                    vehicle_mileage: Some(58_210.0),
                    ..InspectionFields::default()
                }),
                violation: None,
            },
        )
        .map_err(demo_failure)?;
    println!(
        "- {} recorded as {} ({})",
        inspection.title(),
        inspection.id().0,
        inspection.kind()
    );

    let violation = compliance
        .submit(
            &manager,
            ComplianceSubmission {
                compliance_type: ComplianceType::ComplianceViolation,
                vehicle_id: "veh-117".to_string(),
                driver_id: Some("no_driver".to_string()),
                compliance_date: Some(today - Duration::days(1)),
                next_review_date: None,
                status: ComplianceStatus::Pending,
                priority: Priority::High,
                severity: Some(Priority::High),
                title: "Missing tachograph download".to_string(),
                description: "Unit not downloaded within the statutory window.".to_string(),
                regulatory_body: Some("DVSA".to_string()),
                regulatory_reference: None,
                inspection: None,
                violation: Some(ViolationFields {
                    violation_type: ViolationType::Documentation,
                    penalty_amount: Some(250.0),
                    follow_up_required: true,
                    risk_assessment_score: Some(6.0),
                    ..ViolationFields::default()
                }),
            },
        )
        .map_err(demo_failure)?;
    println!(
        "- {} recorded as {} ({})",
        violation.title(),
        violation.id().0,
        violation.kind()
    );

    let stored_violations = compliance_repo.violations();
    if let Some(first) = stored_violations.first() {
        println!(
            "- Stored violation driver field: {:?} | currency {}",
            first.driver_id, first.penalty_currency
        );
    }
    println!(
        "- Collections: {} inspections, {} violations",
        compliance_repo.inspections().len(),
        stored_violations.len()
    );

    if skip_notifications {
        return Ok(());
    }

    println!("\nNotification fan-out");
    let notifications = NotificationService::new(Arc::new(
        InMemoryNotificationRepository::default(),
    ));

    let template = notifications
        .template("route_delay")
        .cloned()
        .expect("stock template present");
    let broadcast_draft = template.apply_to(ComposeRequest {
        target: RecipientTarget::Everyone,
        title: String::new(),
        body: String::new(),
        kind: NotificationKind::Info,
        priority: NotificationPriority::Normal,
        category: NotificationCategory::General,
        channels: vec![Channel::InApp, Channel::Email],
        tags: Vec::new(),
        scheduled_for: None,
        metadata: Default::default(),
    });
    let broadcast = notifications
        .send(&manager, broadcast_draft)
        .map_err(demo_failure)?;
    println!(
        "- Broadcast '{}' to role {:?} over {} channels",
        broadcast.title,
        broadcast.recipient_role.as_ref().map(|role| role.0.as_str()),
        broadcast.channels.len()
    );

    let targeted = notifications
        .send(
            &manager,
            ComposeRequest {
                target: RecipientTarget::Role {
                    role: RoleName("driver".to_string()),
                },
                title: "Pre-trip inspections due".to_string(),
                body: "Complete the daily walkaround before first pickup.".to_string(),
                kind: NotificationKind::Warning,
                priority: NotificationPriority::High,
                category: NotificationCategory::Safety,
                channels: vec![Channel::InApp, Channel::Push],
                tags: Vec::new(),
                scheduled_for: None,
                metadata: Default::default(),
            },
        )
        .map_err(demo_failure)?;

    let inbox = notifications.inbox(&driver).map_err(demo_failure)?;
    println!("- Driver inbox: {} messages", inbox.len());

    let outcome = notifications
        .mark_read_bulk(
            &driver,
            &[
                targeted.id.clone(),
                NotificationId("ntf-missing".to_string()),
            ],
        )
        .map_err(demo_failure)?;
    println!(
        "- Bulk mark-read: {} applied, {} missing",
        outcome.applied.len(),
        outcome.missing.len()
    );

    let stats = notifications.stats(&driver).map_err(demo_failure)?;
    println!(
        "- Stats: {} total | {} unread | delivery rate {}%",
        stats.total,
        stats.unread,
        stats.delivery_rate_pct()
    );

    Ok(())
}

fn demo_file(file_name: &str) -> UploadedFile {
    let content_type = mime_guess::from_path(file_name)
        .first_or_octet_stream()
        .essence_str()
        .to_string();

    UploadedFile {
        file_name: file_name.to_string(),
        content_type,
        bytes: b"demo document body".to_vec(),
    }
}

fn demo_failure<E: std::fmt::Display>(err: E) -> AppError {
    AppError::Io(std::io::Error::new(
        std::io::ErrorKind::Other,
        err.to_string(),
    ))
}
