use sdk::cosmwasm_schema::{export_schema, schema_for};
use strategy::api::{
    ConfigResponse, ExecuteMsg, InstantiateMsg, ManagementResponse, QueryMsg,
    WithdrawLimitResponse,
};

fn main() {
    let out_dir = schema::prep_out_dir().expect("The output directory should be valid");

    export_schema(&schema_for!(InstantiateMsg), &out_dir);
    export_schema(&schema_for!(ExecuteMsg), &out_dir);
    export_schema(&schema_for!(QueryMsg), &out_dir);
    export_schema(&schema_for!(ConfigResponse), &out_dir);
    export_schema(&schema_for!(ManagementResponse), &out_dir);
    export_schema(&schema_for!(WithdrawLimitResponse), &out_dir);
}
