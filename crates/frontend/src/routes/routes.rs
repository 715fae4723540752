use crate::dashboards::d401_hajj_umrah::ui::dashboard::HajjUmrahDashboard;
use crate::dashboards::d402_assets_investments::ui::dashboard::AssetsInvestmentsDashboard;
use crate::dashboards::d403_air_ticketing::ui::dashboard::AirTicketingDashboard;
use crate::domain::a001_asset::ui::{details::AssetDetails, form::AssetForm, list::AssetList};
use crate::domain::a002_vendor::ui::{details::VendorDetails, form::VendorForm, list::VendorList};
use crate::domain::a003_customer::ui::{details::CustomerDetails, form::CustomerForm, list::CustomerList};
use crate::domain::a004_air_agent::ui::{details::AirAgentDetails, form::AirAgentForm, list::AirAgentList};
use crate::domain::a005_gds_record::ui::{details::GdsRecordDetails, form::GdsRecordForm, list::GdsRecordList};
use crate::domain::a006_investment::ui::{details::InvestmentDetails, form::InvestmentForm, list::InvestmentList};
use crate::domain::a007_sar_rate::ui::{details::SarRateDetails, form::SarRateForm, list::SarRateList};
use crate::domain::a008_markup_rule::ui::{details::MarkupRuleDetails, form::MarkupRuleForm, list::MarkupRuleList};
use crate::domain::a009_expense_category::ui::{
    details::ExpenseCategoryDetails, form::ExpenseCategoryForm, list::ExpenseCategoryList,
};
use crate::domain::a010_air_refund::ui::{details::AirRefundDetails, form::AirRefundForm, list::AirRefundList};
use crate::domain::a011_air_reissue::ui::{details::AirReissueDetails, form::AirReissueForm, list::AirReissueList};
use crate::domain::a012_hotel_contract::ui::{
    details::HotelContractDetails, form::HotelContractForm, list::HotelContractList,
};
use crate::domain::a013_employee::ui::{details::EmployeeDetails, form::EmployeeForm, list::EmployeeList};
use crate::layout::Shell;
use crate::pages::home::HomePage;
use crate::pages::search::SearchPage;
use crate::shared::components::status_box::EmptyBox;
use leptos::prelude::*;
use leptos_router::components::{Outlet, ParentRoute, Route, Router, Routes};
use leptos_router::path;

/// Each collection has `list`, `add`, `:id` and `:id/edit`; `add` comes
/// before `:id` so it is never taken for an id.
#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Shell>
                <Routes fallback=|| view! { <EmptyBox message="পৃষ্ঠাটি পাওয়া যায়নি" /> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/search") view=SearchPage />
                    <Route path=path!("/dashboard/hajj-umrah") view=HajjUmrahDashboard />
                    <Route path=path!("/dashboard/assets") view=AssetsInvestmentsDashboard />
                    <Route path=path!("/dashboard/air-ticketing") view=AirTicketingDashboard />
                    <ParentRoute path=path!("/hajj-umrah/customers") view=Outlet>
                        <Route path=path!("list") view=CustomerList />
                        <Route path=path!("add") view=CustomerForm />
                        <Route path=path!(":id") view=CustomerDetails />
                        <Route path=path!(":id/edit") view=CustomerForm />
                    </ParentRoute>
                    <ParentRoute path=path!("/hajj-umrah/hotel-contracts") view=Outlet>
                        <Route path=path!("list") view=HotelContractList />
                        <Route path=path!("add") view=HotelContractForm />
                        <Route path=path!(":id") view=HotelContractDetails />
                        <Route path=path!(":id/edit") view=HotelContractForm />
                    </ParentRoute>
                    <ParentRoute path=path!("/hajj-umrah/sar-rates") view=Outlet>
                        <Route path=path!("list") view=SarRateList />
                        <Route path=path!("add") view=SarRateForm />
                        <Route path=path!(":id") view=SarRateDetails />
                        <Route path=path!(":id/edit") view=SarRateForm />
                    </ParentRoute>
                    <ParentRoute path=path!("/air-ticketing/agents") view=Outlet>
                        <Route path=path!("list") view=AirAgentList />
                        <Route path=path!("add") view=AirAgentForm />
                        <Route path=path!(":id") view=AirAgentDetails />
                        <Route path=path!(":id/edit") view=AirAgentForm />
                    </ParentRoute>
                    <ParentRoute path=path!("/air-ticketing/refund") view=Outlet>
                        <Route path=path!("list") view=AirRefundList />
                        <Route path=path!("add") view=AirRefundForm />
                        <Route path=path!(":id") view=AirRefundDetails />
                        <Route path=path!(":id/edit") view=AirRefundForm />
                    </ParentRoute>
                    <ParentRoute path=path!("/air-ticketing/reissue") view=Outlet>
                        <Route path=path!("list") view=AirReissueList />
                        <Route path=path!("add") view=AirReissueForm />
                        <Route path=path!(":id") view=AirReissueDetails />
                        <Route path=path!(":id/edit") view=AirReissueForm />
                    </ParentRoute>
                    <ParentRoute path=path!("/air-ticketing/gds") view=Outlet>
                        <Route path=path!("list") view=GdsRecordList />
                        <Route path=path!("add") view=GdsRecordForm />
                        <Route path=path!(":id") view=GdsRecordDetails />
                        <Route path=path!(":id/edit") view=GdsRecordForm />
                    </ParentRoute>
                    <ParentRoute path=path!("/vendors") view=Outlet>
                        <Route path=path!("list") view=VendorList />
                        <Route path=path!("add") view=VendorForm />
                        <Route path=path!(":id") view=VendorDetails />
                        <Route path=path!(":id/edit") view=VendorForm />
                    </ParentRoute>
                    <ParentRoute path=path!("/assets") view=Outlet>
                        <Route path=path!("list") view=AssetList />
                        <Route path=path!("add") view=AssetForm />
                        <Route path=path!(":id") view=AssetDetails />
                        <Route path=path!(":id/edit") view=AssetForm />
                    </ParentRoute>
                    <ParentRoute path=path!("/investments") view=Outlet>
                        <Route path=path!("list") view=InvestmentList />
                        <Route path=path!("add") view=InvestmentForm />
                        <Route path=path!(":id") view=InvestmentDetails />
                        <Route path=path!(":id/edit") view=InvestmentForm />
                    </ParentRoute>
                    <ParentRoute path=path!("/personal-expense/categories") view=Outlet>
                        <Route path=path!("list") view=ExpenseCategoryList />
                        <Route path=path!("add") view=ExpenseCategoryForm />
                        <Route path=path!(":id") view=ExpenseCategoryDetails />
                        <Route path=path!(":id/edit") view=ExpenseCategoryForm />
                    </ParentRoute>
                    <ParentRoute path=path!("/settings/markup") view=Outlet>
                        <Route path=path!("list") view=MarkupRuleList />
                        <Route path=path!("add") view=MarkupRuleForm />
                        <Route path=path!(":id") view=MarkupRuleDetails />
                        <Route path=path!(":id/edit") view=MarkupRuleForm />
                    </ParentRoute>
                    <ParentRoute path=path!("/settings/employees") view=Outlet>
                        <Route path=path!("list") view=EmployeeList />
                        <Route path=path!("add") view=EmployeeForm />
                        <Route path=path!(":id") view=EmployeeDetails />
                        <Route path=path!(":id/edit") view=EmployeeForm />
                    </ParentRoute>
                </Routes>
            </Shell>
        </Router>
    }
}
