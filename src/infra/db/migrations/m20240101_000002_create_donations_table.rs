//! Migration: Create donations table.

use sea_orm_migration::prelude::*;

use super::m20240101_000001_create_users_table::Users;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Donations::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Donations::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Donations::DonationId)
                            .uuid()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Donations::DonorId).uuid().not_null())
                    .col(ColumnDef::new(Donations::DonorName).string_len(100).not_null())
                    .col(ColumnDef::new(Donations::DonorContact).string_len(100).not_null())
                    .col(ColumnDef::new(Donations::FoodDetails).text().not_null())
                    .col(ColumnDef::new(Donations::PickupAddress).string_len(200).not_null())
                    .col(ColumnDef::new(Donations::PickupTime).string_len(100).not_null())
                    .col(
                        ColumnDef::new(Donations::Status)
                            .string_len(20)
                            .not_null()
                            .default("pending"),
                    )
                    .col(ColumnDef::new(Donations::AcceptedBy).uuid().null())
                    .col(ColumnDef::new(Donations::NgoName).string_len(100).null())
                    .col(
                        ColumnDef::new(Donations::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_donations_donor_id")
                            .from(Donations::Table, Donations::DonorId)
                            .to(Users::Table, Users::Uid),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_donations_accepted_by")
                            .from(Donations::Table, Donations::AcceptedBy)
                            .to(Users::Table, Users::Uid),
                    )
                    .to_owned(),
            )
            .await?;

        // Dashboard queries filter on each of these
        for (name, column) in [
            ("idx_donations_status", Donations::Status),
            ("idx_donations_donor_id", Donations::DonorId),
            ("idx_donations_accepted_by", Donations::AcceptedBy),
        ] {
            manager
                .create_index(
                    Index::create()
                        .name(name)
                        .table(Donations::Table)
                        .col(column)
                        .to_owned(),
                )
                .await?;
        }

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Donations::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Donations {
    Table,
    Id,
    DonationId,
    DonorId,
    DonorName,
    DonorContact,
    FoodDetails,
    PickupAddress,
    PickupTime,
    Status,
    AcceptedBy,
    NgoName,
    CreatedAt,
}
