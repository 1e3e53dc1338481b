use sdk::cosmwasm_schema::{export_schema, schema_for};
use strategy_factory::msg::{
    ConfigResponse, DeployResponse, DeploymentsResponse, ExecuteMsg, InstantiateMsg, QueryMsg,
};

fn main() {
    let out_dir = schema::prep_out_dir().expect("The output directory should be valid");

    export_schema(&schema_for!(InstantiateMsg), &out_dir);
    export_schema(&schema_for!(ExecuteMsg), &out_dir);
    export_schema(&schema_for!(QueryMsg), &out_dir);
    export_schema(&schema_for!(ConfigResponse), &out_dir);
    export_schema(&schema_for!(DeployResponse), &out_dir);
    export_schema(&schema_for!(DeploymentsResponse), &out_dir);
}
